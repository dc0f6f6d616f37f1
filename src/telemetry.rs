//! Run telemetry for the dataset build.
//!
//! Tracks what the pipeline found and what it had to skip, so a run over
//! a partially available corpus can be audited afterwards. All counts
//! are advisory; nothing recorded here ever aborts a build.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counters for one pipeline run.
#[derive(Debug)]
pub struct RunLog {
    /// Subject folders discovered under the corpus root
    subjects_discovered: AtomicU64,
    /// Students with at least one grade recovered from the report
    grade_entries: AtomicU64,
    /// Records accumulated for export
    records_emitted: AtomicU64,
    /// Skips: the exam folder was missing for a subject
    missing_exam_folders: AtomicU64,
    /// Skips: no grade for a subject/exam combination
    missing_grades: AtomicU64,
    /// Skips: a measure file was absent from an exam folder
    missing_measure_files: AtomicU64,
    /// Skips: a measure file existed but was structurally unreadable
    unreadable_signals: AtomicU64,
    /// Unique identifier for this run
    run_id: Uuid,
    /// Run start time
    run_start: DateTime<Utc>,
}

impl RunLog {
    /// Create a new run log with a fresh run id.
    pub fn new() -> Self {
        Self {
            subjects_discovered: AtomicU64::new(0),
            grade_entries: AtomicU64::new(0),
            records_emitted: AtomicU64::new(0),
            missing_exam_folders: AtomicU64::new(0),
            missing_grades: AtomicU64::new(0),
            missing_measure_files: AtomicU64::new(0),
            unreadable_signals: AtomicU64::new(0),
            run_id: Uuid::new_v4(),
            run_start: Utc::now(),
        }
    }

    /// Get this run's unique identifier.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Record the number of subject folders found in the corpus.
    pub fn record_subjects_discovered(&self, count: u64) {
        self.subjects_discovered.store(count, Ordering::Relaxed);
    }

    /// Record the number of students recovered from the grade report.
    pub fn record_grade_entries(&self, count: u64) {
        self.grade_entries.store(count, Ordering::Relaxed);
    }

    /// Record a dataset record accumulated for export.
    pub fn record_record_emitted(&self) {
        self.records_emitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a skipped exam: its folder was missing.
    pub fn record_missing_exam_folder(&self) {
        self.missing_exam_folders.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a skipped exam: no grade for the subject/exam pair.
    pub fn record_missing_grade(&self) {
        self.missing_grades.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a skipped measure: its file was absent.
    pub fn record_missing_measure_file(&self) {
        self.missing_measure_files.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a skipped measure: its file could not be read.
    pub fn record_unreadable_signal(&self) {
        self.unreadable_signals.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current statistics.
    pub fn stats(&self) -> RunStats {
        RunStats {
            run_id: self.run_id,
            run_start: self.run_start,
            subjects_discovered: self.subjects_discovered.load(Ordering::Relaxed),
            grade_entries: self.grade_entries.load(Ordering::Relaxed),
            records_emitted: self.records_emitted.load(Ordering::Relaxed),
            missing_exam_folders: self.missing_exam_folders.load(Ordering::Relaxed),
            missing_grades: self.missing_grades.load(Ordering::Relaxed),
            missing_measure_files: self.missing_measure_files.load(Ordering::Relaxed),
            unreadable_signals: self.unreadable_signals.load(Ordering::Relaxed),
        }
    }

    /// Get a summary string for display at the end of a run.
    pub fn summary(&self) -> String {
        let stats = self.stats();
        format!(
            "Run Statistics:\n\
             - Subject folders discovered: {}\n\
             - Students with grades: {}\n\
             - Records emitted: {}\n\
             - Skipped (missing exam folder): {}\n\
             - Skipped (missing grade): {}\n\
             - Skipped (missing measure file): {}\n\
             - Skipped (unreadable signal file): {}",
            stats.subjects_discovered,
            stats.grade_entries,
            stats.records_emitted,
            stats.missing_exam_folders,
            stats.missing_grades,
            stats.missing_measure_files,
            stats.unreadable_signals
        )
    }
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of run statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    pub run_id: Uuid,
    pub run_start: DateTime<Utc>,
    pub subjects_discovered: u64,
    pub grade_entries: u64,
    pub records_emitted: u64,
    pub missing_exam_folders: u64,
    pub missing_grades: u64,
    pub missing_measure_files: u64,
    pub unreadable_signals: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_log_counting() {
        let log = RunLog::new();

        log.record_subjects_discovered(10);
        log.record_grade_entries(9);
        log.record_record_emitted();
        log.record_record_emitted();
        log.record_missing_grade();
        log.record_missing_measure_file();

        let stats = log.stats();
        assert_eq!(stats.subjects_discovered, 10);
        assert_eq!(stats.grade_entries, 9);
        assert_eq!(stats.records_emitted, 2);
        assert_eq!(stats.missing_grades, 1);
        assert_eq!(stats.missing_measure_files, 1);
        assert_eq!(stats.missing_exam_folders, 0);
        assert_eq!(stats.unreadable_signals, 0);
    }

    #[test]
    fn test_run_ids_are_unique() {
        assert_ne!(RunLog::new().run_id(), RunLog::new().run_id());
    }

    #[test]
    fn test_summary_format() {
        let log = RunLog::new();
        log.record_missing_exam_folder();

        let summary = log.summary();
        assert!(summary.contains("Subject folders discovered"));
        assert!(summary.contains("missing exam folder"));
        assert!(summary.contains("Records emitted"));
    }
}
