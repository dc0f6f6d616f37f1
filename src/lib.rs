//! examsense - links wearable physiological recordings to exam performance.
//!
//! This library turns a corpus of per-subject Empatica-style signal
//! exports (HR, EDA, TEMP, BVP) plus a loosely formatted grade report
//! into one flat JSON dataset of per-exam windowed averages, ready for
//! downstream visualization.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          examsense                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌────────────┐   ┌────────────┐       ┌────────────┐        │
//! │  │   Signal   │──▶│   Window   │──┐    │   Grade    │        │
//! │  │   reader   │   │  averages  │  │    │ extractor  │        │
//! │  └────────────┘   └────────────┘  │    └─────┬──────┘        │
//! │                                   ▼          ▼               │
//! │  ┌────────────┐             ┌──────────────────────┐         │
//! │  │   Roster   │────────────▶│    Dataset builder   │         │
//! │  │ reconciler │             │   (join and export)  │         │
//! │  └────────────┘             └──────────────────────┘         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pipeline is deliberately lenient: noise lines in recordings and
//! unmatched lines in the report are dropped silently, and any missing
//! file or missing grade turns into a logged skip rather than a failure.
//!
//! # Example
//!
//! ```no_run
//! use examsense::{dataset, DatasetBuilder};
//! use std::path::PathBuf;
//!
//! let builder = DatasetBuilder::new(
//!     PathBuf::from("Data"),
//!     PathBuf::from("StudentGrades.txt"),
//! );
//! let records = builder.build().expect("corpus root must be readable");
//! dataset::write_dataset(&records, &PathBuf::from("processed_data.json"), false)
//!     .expect("write dataset");
//! ```

pub mod config;
pub mod core;
pub mod dataset;
pub mod telemetry;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigError};
pub use core::{
    canonicalize, load_report, parse_report, read_signal, subject_id, window_average, Exam,
    GradeTable, RawSignal, SignalError, TimeWindow,
};
pub use dataset::{AggValue, DatasetBuilder, DatasetError, ExamRecord, Measure};
pub use telemetry::{RunLog, RunStats};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
