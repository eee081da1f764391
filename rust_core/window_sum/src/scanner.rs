use std::iter::FusedIterator;
use std::ops::{Add, Sub};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::InvalidWindowError;

/// Element types a window can be summed over.
pub trait WindowValue: Copy + Add<Output = Self> + Sub<Output = Self> + PartialOrd {}

impl<T> WindowValue for T where T: Copy + Add<Output = T> + Sub<Output = T> + PartialOrd {}

/// Check `window_size` against a sequence of `len` elements.
/// A window covering the whole sequence is valid.
pub fn validate_window(window_size: usize, len: usize) -> Result<usize, InvalidWindowError> {
    if window_size == 0 {
        return Err(InvalidWindowError::NonPositive(0));
    }
    if window_size > len {
        return Err(InvalidWindowError::ExceedsLength { window_size, len });
    }
    Ok(window_size)
}

/// Same as [`validate_window`] for sizes coming from signed sources (JSON, Python).
pub fn window_size_from_signed(window_size: i64, len: usize) -> Result<usize, InvalidWindowError> {
    validate_window(positive_window_size(window_size)?, len)
}

// Sizes that do not fit in `usize` saturate; `validate_window` then rejects them by length.
fn positive_window_size(window_size: i64) -> Result<usize, InvalidWindowError> {
    if window_size < 1 {
        return Err(InvalidWindowError::NonPositive(window_size));
    }
    Ok(usize::try_from(window_size).unwrap_or(usize::MAX))
}

/// The best window found by a scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowMax<T> {
    /// index of the first element of the window
    pub start: usize,
    /// window size
    pub len: usize,
    pub sum: T,
}

impl<T> WindowMax<T> {
    /// The elements of the winning window within the scanned sequence.
    pub fn window<'a>(&self, seq: &'a [T]) -> Option<&'a [T]> {
        self.start
            .checked_add(self.len)
            .and_then(|end| seq.get(self.start..end))
    }
}

/// Running sum of every window, in start order.
///
/// The first item is the plain sum of `seq[0..k]`; each following item is
/// derived from the previous one by removing the leaving element and adding
/// the entering one, so the whole pass is O(n).
#[derive(Debug, Clone)]
pub struct WindowSums<'a, T> {
    seq: &'a [T],
    k: usize,
    // index of the element entering the next window
    next: usize,
    running: Option<T>,
}

impl<'a, T: WindowValue> WindowSums<'a, T> {
    // `k` must already satisfy `validate_window(k, seq.len())`
    fn new(seq: &'a [T], k: usize) -> Self {
        WindowSums { seq, k, next: k, running: None }
    }
}

impl<'a, T: WindowValue> Iterator for WindowSums<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let sum = match self.running {
            None => {
                let (head, rest) = self.seq[..self.k].split_first()?;
                rest.iter().fold(*head, |acc, &x| acc + x)
            }
            Some(running) => {
                let i = self.next;
                if i >= self.seq.len() {
                    return None;
                }
                self.next += 1;
                // leaving element first: the partial sum is a real sum of k - 1 elements
                running - self.seq[i - self.k] + self.seq[i]
            }
        };
        self.running = Some(sum);
        Some(sum)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.running {
            None => self.seq.len() - self.k + 1,
            Some(_) => self.seq.len() - self.next,
        };
        (remaining, Some(remaining))
    }
}

impl<'a, T: WindowValue> ExactSizeIterator for WindowSums<'a, T> {}

impl<'a, T: WindowValue> FusedIterator for WindowSums<'a, T> {}

/// Sliding-window scanner bound to a fixed window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSumScanner {
    window_size: usize,
}

impl WindowSumScanner {
    pub fn new(window_size: usize) -> Self {
        WindowSumScanner { window_size }
    }

    /// Reject sizes below 1 before any sequence is seen.
    pub fn try_from_signed(window_size: i64) -> Result<Self, InvalidWindowError> {
        positive_window_size(window_size).map(WindowSumScanner::new)
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Sums of all `len - k + 1` windows of `seq`.
    pub fn window_sums<'a, T: WindowValue>(
        &self,
        seq: &'a [T],
    ) -> Result<WindowSums<'a, T>, InvalidWindowError> {
        let k = validate_window(self.window_size, seq.len())?;
        Ok(WindowSums::new(seq, k))
    }

    /// Find the window with the largest sum. Ties keep the earliest window.
    pub fn scan<T: WindowValue>(&self, seq: &[T]) -> Result<WindowMax<T>, InvalidWindowError> {
        let sums = self.window_sums(seq)?;
        let windows = sums.len();
        let best = sums
            .enumerate()
            .map(|(start, sum)| WindowMax { start, len: self.window_size, sum })
            .reduce(|best, w| if w.sum > best.sum { w } else { best })
            .ok_or(InvalidWindowError::ExceedsLength { window_size: self.window_size, len: seq.len() })?;
        debug!(
            "scanned {} windows of size {} over {} values, best starts at {}",
            windows,
            self.window_size,
            seq.len(),
            best.start
        );
        Ok(best)
    }

    pub fn max_sum<T: WindowValue>(&self, seq: &[T]) -> Result<T, InvalidWindowError> {
        self.scan(seq).map(|w| w.sum)
    }
}

/// Maximum sum over all contiguous windows of `window_size` elements.
pub fn max_window_sum<T: WindowValue>(seq: &[T], window_size: usize) -> Result<T, InvalidWindowError> {
    WindowSumScanner::new(window_size).max_sum(seq)
}
