//! window_sum
//!
//! Maximum sum over all contiguous fixed-size windows of a numeric sequence.
//!
//! The scan keeps a running sum of the current window and moves it one step at a
//! time by adding the element entering the window and subtracting the one leaving
//! it, so every window is visited in a single O(n) pass with O(1) extra space.
//! A window spanning the whole sequence is valid; sizes of zero or larger than
//! the sequence are rejected with [`InvalidWindowError`] before any arithmetic.

pub mod config;
pub mod errors;
pub mod scanner;

pub use config::ScanRequest;
pub use errors::{ConfigError, InvalidWindowError};
pub use scanner::{
    max_window_sum, validate_window, window_size_from_signed, WindowMax, WindowSumScanner,
    WindowSums, WindowValue,
};
