//! Core processing for examsense.
//!
//! This module contains:
//! - Tolerant reading of sampled physiological recordings
//! - Windowed averaging over sample sequences
//! - Grade extraction from the semi-structured course report
//! - Reconciliation of folder names with canonical subject ids

pub mod exam;
pub mod grades;
pub mod roster;
pub mod signal;
pub mod window;

// Re-export commonly used types
pub use exam::Exam;
pub use grades::{load_report, parse_report, GradeTable};
pub use roster::{canonicalize, subject_id};
pub use signal::{read_signal, RawSignal, SignalError};
pub use window::{average_between, window_average, TimeWindow};
