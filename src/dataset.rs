//! Dataset assembly: joins windowed signal aggregates with exam grades
//! and exports the result as a single flat JSON array.
//!
//! The corpus layout is `<corpus_root>/<subject>/<exam>/<MEASURE>.csv`.
//! Every per-item failure (missing folder, missing grade, missing or
//! unreadable measure file) is logged, counted, and skipped; the build
//! always produces a best-effort dataset from whatever is available.

use crate::config::Config;
use crate::core::exam::Exam;
use crate::core::grades;
use crate::core::roster;
use crate::core::signal::read_signal;
use crate::core::window::window_average;
use crate::telemetry::RunLog;
use log::{debug, info, warn};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One of the four physiological channels recorded per exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Hr,
    Eda,
    Temp,
    Bvp,
}

impl Measure {
    /// All channels, in the order they are looked up per exam.
    pub const ALL: [Measure; 4] = [Measure::Hr, Measure::Eda, Measure::Temp, Measure::Bvp];

    /// File name inside an exam folder.
    pub fn file_name(&self) -> &'static str {
        match self {
            Measure::Hr => "HR.csv",
            Measure::Eda => "EDA.csv",
            Measure::Temp => "TEMP.csv",
            Measure::Bvp => "BVP.csv",
        }
    }

    /// Key prefix in the output record (`HR_avg`, `HR_period1`, ...).
    pub fn prefix(&self) -> &'static str {
        match self {
            Measure::Hr => "HR",
            Measure::Eda => "EDA",
            Measure::Temp => "TEMP",
            Measure::Bvp => "BVP",
        }
    }
}

/// A window aggregate in the output dataset.
///
/// Absent averages serialize as the string `"NaN"` rather than the JSON
/// numeric NaN (which is not legal JSON); the downstream D3 tooling
/// expects that sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AggValue {
    Value(f64),
    Missing,
}

impl From<Option<f64>> for AggValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => AggValue::Value(v),
            None => AggValue::Missing,
        }
    }
}

impl Serialize for AggValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AggValue::Value(v) => serializer.serialize_f64(*v),
            AggValue::Missing => serializer.serialize_str("NaN"),
        }
    }
}

/// One row of the output dataset.
///
/// The aggregates map contributes flattened keys (`HR_avg`,
/// `HR_period1`, ...) for each measure that yielded data; measures with
/// no usable recording contribute no keys at all.
#[derive(Debug, Clone, Serialize)]
pub struct ExamRecord {
    pub student_id: String,
    pub exam_type: Exam,
    pub grade: f64,
    #[serde(flatten)]
    pub aggregates: BTreeMap<String, AggValue>,
}

/// Errors for a build that cannot start or finish at all.
///
/// Per-subject and per-file problems never surface here; they are
/// absorbed into skips. Only an unreadable corpus root or a failed
/// artifact write is fatal.
#[derive(Debug)]
pub enum DatasetError {
    IoError(String),
    SerializeError(String),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::IoError(e) => write!(f, "IO error: {e}"),
            DatasetError::SerializeError(e) => write!(f, "Serialize error: {e}"),
        }
    }
}

impl std::error::Error for DatasetError {}

/// Drives the full pipeline: grade extraction once, then signal reading
/// and window aggregation per subject/exam/measure combination.
pub struct DatasetBuilder {
    corpus_root: PathBuf,
    grade_report: PathBuf,
    log: RunLog,
}

impl DatasetBuilder {
    /// Create a builder for the given corpus root and grade report.
    pub fn new(corpus_root: PathBuf, grade_report: PathBuf) -> Self {
        Self {
            corpus_root,
            grade_report,
            log: RunLog::new(),
        }
    }

    /// Create a builder from the active configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.corpus_root.clone(), config.grade_report.clone())
    }

    /// Get the telemetry log for this build.
    pub fn log(&self) -> &RunLog {
        &self.log
    }

    /// Walk the corpus and assemble the record set, sorted by subject id
    /// and exam order.
    pub fn build(&self) -> Result<Vec<ExamRecord>, DatasetError> {
        let grade_table = grades::load_report(&self.grade_report);
        self.log.record_grade_entries(grade_table.len() as u64);

        let folders = self.subject_folders()?;
        self.log.record_subjects_discovered(folders.len() as u64);
        info!("found {} subject folders", folders.len());

        let mut records = Vec::new();
        for folder in &folders {
            let student_id = roster::subject_id(folder);

            let Some(student_grades) = grade_table.get(&student_id) else {
                info!("no grades found for {student_id} (folder: {folder}), skipping");
                self.log.record_missing_grade();
                continue;
            };

            for exam in Exam::ALL {
                if let Some(record) =
                    self.collect_exam(folder, &student_id, exam, student_grades)
                {
                    self.log.record_record_emitted();
                    records.push(record);
                }
            }
        }

        records.sort_by(|a, b| {
            a.student_id
                .cmp(&b.student_id)
                .then(a.exam_type.cmp(&b.exam_type))
        });
        Ok(records)
    }

    /// Aggregate all measures for one subject/exam pair. Returns `None`
    /// when the pair is skipped or no measure contributed any data.
    fn collect_exam(
        &self,
        folder: &str,
        student_id: &str,
        exam: Exam,
        student_grades: &BTreeMap<Exam, f64>,
    ) -> Option<ExamRecord> {
        let exam_dir = self.corpus_root.join(folder).join(exam.name());
        if !exam_dir.exists() {
            info!("exam folder not found: {}", exam_dir.display());
            self.log.record_missing_exam_folder();
            return None;
        }

        let Some(&grade) = student_grades.get(&exam) else {
            info!("no grade found for {student_id} in {exam}");
            self.log.record_missing_grade();
            return None;
        };

        info!("processing {student_id} - {exam}");

        let mut aggregates = BTreeMap::new();
        for measure in Measure::ALL {
            let path = exam_dir.join(measure.file_name());
            if !path.exists() {
                debug!("measure file not found: {}", path.display());
                self.log.record_missing_measure_file();
                continue;
            }

            let signal = match read_signal(&path, None) {
                Ok(signal) => signal,
                Err(e) => {
                    warn!("error reading {}: {e}", path.display());
                    self.log.record_unreadable_signal();
                    continue;
                }
            };
            if signal.is_empty() {
                continue;
            }

            aggregates.insert(
                format!("{}_avg", measure.prefix()),
                AggValue::from(window_average(
                    &signal.values,
                    signal.sample_rate,
                    exam.full_window(),
                )),
            );
            for (i, window) in exam.thirds().into_iter().enumerate() {
                aggregates.insert(
                    format!("{}_period{}", measure.prefix(), i + 1),
                    AggValue::from(window_average(
                        &signal.values,
                        signal.sample_rate,
                        window,
                    )),
                );
            }
        }

        if aggregates.is_empty() {
            return None;
        }

        Some(ExamRecord {
            student_id: student_id.to_string(),
            exam_type: exam,
            grade,
            aggregates,
        })
    }

    /// Subject folders under the corpus root, in sorted order. Only
    /// directories whose name starts with `S` count.
    fn subject_folders(&self) -> Result<Vec<String>, DatasetError> {
        let entries = std::fs::read_dir(&self.corpus_root).map_err(|e| {
            DatasetError::IoError(format!(
                "corpus root {}: {e}",
                self.corpus_root.display()
            ))
        })?;

        let mut folders: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.starts_with('S'))
            .collect();
        folders.sort();
        Ok(folders)
    }
}

/// Serialize the record set as a single JSON array.
pub fn to_json(records: &[ExamRecord], pretty: bool) -> Result<String, DatasetError> {
    let result = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    };
    result.map_err(|e| DatasetError::SerializeError(e.to_string()))
}

/// Write the record set to the output artifact, exactly once.
pub fn write_dataset(
    records: &[ExamRecord],
    path: &Path,
    pretty: bool,
) -> Result<(), DatasetError> {
    let json = to_json(records, pretty)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| DatasetError::IoError(e.to_string()))?;
        }
    }
    std::fs::write(path, json).map_err(|e| DatasetError::IoError(e.to_string()))
}
