use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{info, warn};
use window_sum::{ScanRequest, WindowMax};

/// Report the largest sum over all contiguous windows of a fixed size.
///
/// With no arguments the built-in demo sequence is scanned.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON file holding {"sequence": [...], "window_size": k}
    #[arg(long, conflicts_with_all = ["sequence", "window"])]
    input: Option<PathBuf>,

    /// Comma-separated values, e.g. --sequence=2,1,5,1,3
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, requires = "window")]
    sequence: Option<Vec<f64>>,

    /// Window size to scan the inline sequence with
    #[arg(long, allow_negative_numbers = true, requires = "sequence")]
    window: Option<i64>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn print_result<W: Write>(
    out: &mut W,
    req: &ScanRequest,
    best: &WindowMax<f64>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let window = best.window(&req.sequence).unwrap_or_default();
    if json {
        let value = serde_json::json!({ "start": best.start, "sum": best.sum, "window": window });
        writeln!(out, "{}", serde_json::to_string(&value)?)?;
    } else {
        writeln!(
            out,
            "max window sum: {} (window starting at {}: {:?})",
            best.sum, best.start, window
        )?;
    }
    Ok(())
}

/// Scan the request described by `cli` and report to `out`/`err`.
/// Returns the process exit status.
fn run<W: Write, E: Write>(cli: Cli, out: &mut W, err: &mut E) -> Result<i32, Box<dyn Error>> {
    let req = match (cli.input, cli.sequence, cli.window) {
        (Some(path), _, _) => ScanRequest::from_path(path)?,
        (None, Some(sequence), Some(window)) => ScanRequest::new(sequence, window),
        _ => {
            info!("no input given, scanning the demo sequence");
            ScanRequest::default()
        }
    };

    match req.run() {
        Ok(best) => {
            print_result(out, &req, &best, cli.json)?;
            Ok(0)
        }
        Err(e) => {
            warn!("scan rejected: {:?}", e);
            writeln!(err, "error: {}", e)?;
            Ok(1)
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let code = run(cli, &mut io::stdout(), &mut io::stderr())?;
    if code != 0 {
        process::exit(code);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_inline_sequence_args() {
        let cli = Cli::try_parse_from(["window_scan", "--sequence=3,-1,4", "--window", "-2"]).unwrap();
        assert_eq!(cli.sequence, Some(vec![3.0, -1.0, 4.0]));
        assert_eq!(cli.window, Some(-2));
        assert!(!cli.json);
    }

    #[test]
    fn test_input_conflicts_with_inline() {
        let res = Cli::try_parse_from(["window_scan", "--input", "req.json", "--window", "2"]);
        assert!(res.is_err());
    }

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(cli, &mut out, &mut err).unwrap();
        (code, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_demo_text_output() {
        let (code, out, err) = run_args(&["window_scan"]);
        assert_eq!(code, 0);
        assert_eq!(out, "max window sum: 20 (window starting at 6: [8.0, 8.0, 4.0])\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_inline_full_length_window() {
        let (code, out, _) = run_args(&["window_scan", "--sequence=1,2", "--window", "2"]);
        assert_eq!(code, 0);
        assert_eq!(out, "max window sum: 3 (window starting at 0: [1.0, 2.0])\n");
    }

    #[test]
    fn test_json_output() {
        let (code, out, _) = run_args(&["window_scan", "--sequence=3,-1,4,-1,5", "--window", "1", "--json"]);
        assert_eq!(code, 0);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value, serde_json::json!({ "start": 4, "sum": 5.0, "window": [5.0] }));
    }

    #[test]
    fn test_zero_window_rejected() {
        let (code, out, err) = run_args(&["window_scan", "--sequence=1,2,3", "--window", "0"]);
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err, "error: window size must be at least 1, got 0\n");
    }

    #[test]
    fn test_oversized_window_rejected() {
        let (code, _, err) = run_args(&["window_scan", "--sequence=1,2", "--window", "3"]);
        assert_eq!(code, 1);
        assert_eq!(err, "error: window size 3 exceeds sequence length 2\n");
    }

    #[test]
    fn test_input_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{"sequence": [1, 1, 1, 1], "window_size": 2}}"#).unwrap();
        let path = f.path().to_str().unwrap().to_string();
        let (code, out, _) = run_args(&["window_scan", "--input", &path]);
        assert_eq!(code, 0);
        assert_eq!(out, "max window sum: 2 (window starting at 0: [1.0, 1.0])\n");
    }

    #[test]
    fn test_missing_input_file_is_an_error() {
        let cli = Cli::try_parse_from(["window_scan", "--input", "/nonexistent/request.json"]).unwrap();
        let res = run(cli, &mut Vec::<u8>::new(), &mut Vec::<u8>::new());
        assert!(res.is_err());
    }
}
