//! Reader for sampled physiological recordings.
//!
//! Each recording is a plain text file: the first line is the absolute
//! start time of the recording, the second line is the sample rate in Hz,
//! and every following line holds one sample. The exports are known to
//! contain noise lines, so individual samples that fail to parse are
//! dropped rather than failing the whole file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A fully loaded recording for one physiological channel.
///
/// Sample `i` corresponds to time `start_time + i / sample_rate`.
#[derive(Debug, Clone)]
pub struct RawSignal {
    /// Samples in recording order
    pub values: Vec<f64>,
    /// Absolute reference instant of the first sample (typically epoch seconds)
    pub start_time: f64,
    /// Samples per second
    pub sample_rate: f64,
}

impl RawSignal {
    /// Number of samples in the recording.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the recording holds no samples at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Total covered duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate > 0.0 {
            self.values.len() as f64 / self.sample_rate
        } else {
            0.0
        }
    }

    /// Absolute timestamp of the sample at `index`.
    pub fn timestamp_of(&self, index: usize) -> f64 {
        self.start_time + index as f64 / self.sample_rate
    }
}

/// Errors for structurally unreadable recordings.
///
/// These cover the whole-file failures only; bad individual sample lines
/// are skipped silently and never surface here.
#[derive(Debug)]
pub enum SignalError {
    IoError(String),
    BadHeader(String),
}

impl std::fmt::Display for SignalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalError::IoError(e) => write!(f, "IO error: {e}"),
            SignalError::BadHeader(e) => write!(f, "Bad header: {e}"),
        }
    }
}

impl std::error::Error for SignalError {}

/// Read one recording file.
///
/// A caller-supplied `sample_rate` overrides the file's own rate line;
/// the line is still consumed to keep the samples aligned, but its value
/// is discarded. Empty lines and lines that do not parse as a number are
/// skipped. Any structural problem (missing file, truncated or
/// non-numeric header) is reported as an error and yields no data.
pub fn read_signal(path: &Path, sample_rate: Option<f64>) -> Result<RawSignal, SignalError> {
    let file = File::open(path).map_err(|e| SignalError::IoError(e.to_string()))?;
    let mut reader = BufReader::new(file);

    let start_time = read_header_value(&mut reader, "start time")?;
    let sample_rate = match sample_rate {
        Some(rate) => {
            // Consume the rate line so the sample lines stay aligned.
            let mut line = String::new();
            reader
                .read_line(&mut line)
                .map_err(|e| SignalError::IoError(e.to_string()))?;
            rate
        }
        None => read_header_value(&mut reader, "sample rate")?,
    };

    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| SignalError::IoError(e.to_string()))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<f64>() {
            Ok(value) => values.push(value),
            // Noise line, drop it and keep reading.
            Err(_) => continue,
        }
    }

    Ok(RawSignal {
        values,
        start_time,
        sample_rate,
    })
}

/// Read one numeric header line, failing on EOF or non-numeric content.
fn read_header_value<R: BufRead>(reader: &mut R, what: &str) -> Result<f64, SignalError> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| SignalError::IoError(e.to_string()))?;
    if read == 0 {
        return Err(SignalError::BadHeader(format!("missing {what} line")));
    }
    line.trim()
        .parse::<f64>()
        .map_err(|_| SignalError::BadHeader(format!("{what} is not a number: {:?}", line.trim())))
}
