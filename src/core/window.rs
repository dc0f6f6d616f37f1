//! Windowed averaging over sampled signal values.
//!
//! Windows are expressed in minutes from recording start and converted to
//! sample indices through the channel's sample rate. A window that falls
//! entirely outside the recording produces no value, which downstream
//! code treats as a legitimate outcome rather than an error.

use serde::{Deserialize, Serialize};

/// A half-open time interval `[start_minute, end_minute)` relative to
/// recording start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_minute: f64,
    pub end_minute: f64,
}

impl TimeWindow {
    /// Create a new window. `end_minute` must be greater than `start_minute`.
    pub fn new(start_minute: f64, end_minute: f64) -> Self {
        debug_assert!(end_minute > start_minute);
        Self {
            start_minute,
            end_minute,
        }
    }

    /// Window length in minutes.
    pub fn duration_minutes(&self) -> f64 {
        self.end_minute - self.start_minute
    }
}

/// Mean of the samples covered by `window`, or `None` when the window
/// holds no samples.
///
/// Minutes are converted to indices by rounding down
/// (`index = floor(minute * 60 * sample_rate)`); the end index is clamped
/// to the sequence length.
pub fn window_average(values: &[f64], sample_rate: f64, window: TimeWindow) -> Option<f64> {
    average_between(values, sample_rate, window.start_minute, window.end_minute)
}

/// Mean over `[start_minute, end_minute)`, or `None` when the range holds
/// no samples.
pub fn average_between(
    values: &[f64],
    sample_rate: f64,
    start_minute: f64,
    end_minute: f64,
) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let start_idx = (start_minute * 60.0 * sample_rate) as usize;
    let end_idx = (end_minute * 60.0 * sample_rate) as usize;

    let end_idx = end_idx.min(values.len());
    if start_idx >= end_idx || start_idx >= values.len() {
        return None;
    }

    let subset = &values[start_idx..end_idx];
    Some(subset.iter().sum::<f64>() / subset.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_signal_full_window() {
        // 90 minutes at 1 Hz, all samples equal
        let values = vec![5.0; 90 * 60];
        let avg = average_between(&values, 1.0, 0.0, 90.0);
        assert_eq!(avg, Some(5.0));
    }

    #[test]
    fn test_partial_window_mean() {
        // 2 minutes at 1 Hz: first minute all 1.0, second minute all 3.0
        let mut values = vec![1.0; 60];
        values.extend(vec![3.0; 60]);

        assert_eq!(average_between(&values, 1.0, 0.0, 1.0), Some(1.0));
        assert_eq!(average_between(&values, 1.0, 1.0, 2.0), Some(3.0));
        assert_eq!(average_between(&values, 1.0, 0.0, 2.0), Some(2.0));
    }

    #[test]
    fn test_window_past_recording_end_is_absent() {
        let values = vec![1.0; 60];
        assert_eq!(average_between(&values, 1.0, 2.0, 3.0), None);
    }

    #[test]
    fn test_end_index_is_clamped() {
        // Recording stops halfway through the requested window
        let values = vec![4.0; 90];
        let avg = average_between(&values, 1.0, 1.0, 3.0);
        assert_eq!(avg, Some(4.0));
    }

    #[test]
    fn test_empty_values_is_absent() {
        assert_eq!(average_between(&[], 4.0, 0.0, 90.0), None);
    }

    #[test]
    fn test_start_at_length_is_absent() {
        let values = vec![1.0, 2.0, 3.0];
        // start index lands exactly at the sequence length
        assert_eq!(average_between(&values, 1.0, 0.05, 0.1), None);
    }

    #[test]
    fn test_fractional_sample_rate() {
        // 0.5 Hz: one sample every two seconds, 30 samples in one minute
        let values: Vec<f64> = (0..60).map(|i| i as f64).collect();
        let avg = average_between(&values, 0.5, 0.0, 1.0).expect("some");
        // indices [0, 30): mean of 0..=29
        assert!((avg - 14.5).abs() < 1e-9);
    }

    #[test]
    fn test_time_window_helper() {
        let window = TimeWindow::new(30.0, 60.0);
        assert_eq!(window.duration_minutes(), 30.0);

        let values = vec![2.0; 90 * 60];
        assert_eq!(window_average(&values, 1.0, window), Some(2.0));
    }
}
