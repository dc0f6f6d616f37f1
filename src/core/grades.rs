//! Extraction of per-student exam scores from the grade report.
//!
//! The report is a loosely formatted text file with three labeled
//! sections, one per exam, each header followed by a ruler of dashes and
//! then one line per student. The surrounding prose varies between
//! course offerings, so parsing is a line scanner driven by a small
//! section state machine: lines that neither open a section nor look
//! like a grade line are ignored.

use crate::core::exam::Exam;
use crate::core::roster;
use log::{info, warn};
use std::collections::BTreeMap;
use std::path::Path;

/// Canonical subject id -> exam -> score on the common 0-100 scale.
pub type GradeTable = BTreeMap<String, BTreeMap<Exam, f64>>;

/// Scanner state: outside any section, or inside one exam's block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Outside,
    In(Exam),
}

/// Load the grade report from disk and parse it.
///
/// The file is decoded permissively (invalid byte sequences are
/// replaced, matching the mixed encodings seen in real reports). An
/// unreadable report degrades to an empty table with a warning; the
/// pipeline then simply finds no grades to join against.
pub fn load_report(path: &Path) -> GradeTable {
    let text = match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            warn!("could not read grade report {}: {e}", path.display());
            return GradeTable::new();
        }
    };

    let table = parse_report(&text);
    info!("recovered grades for {} students", table.len());
    table
}

/// Parse report text into a [`GradeTable`].
///
/// Scores in the Final section are halved before storage: the source
/// report records the final out of 200 while midterms are out of 100.
/// Duplicate lines for the same student within a section overwrite
/// earlier ones.
pub fn parse_report(text: &str) -> GradeTable {
    let mut table = GradeTable::new();
    let mut section = Section::Outside;

    for line in text.lines() {
        if let Some(exam) = section_header(line) {
            section = Section::In(exam);
            continue;
        }

        let Section::In(exam) = section else {
            continue;
        };

        if let Some((id, raw_grade)) = match_grade_line(line) {
            let student_id = roster::canonicalize(&id);
            let grade = f64::from(raw_grade) / exam.grade_scale_divisor();
            table.entry(student_id).or_default().insert(exam, grade);
        }
    }

    table
}

/// Recognize a section header line.
fn section_header(line: &str) -> Option<Exam> {
    Exam::ALL
        .into_iter()
        .find(|exam| line.contains(exam.section_header()))
}

/// Match a student-grade line: an `S`-plus-digits token anywhere in the
/// line, then an integer after any run of non-digit filler. Returns the
/// identifier as written plus the raw grade.
fn match_grade_line(line: &str) -> Option<(String, u32)> {
    let bytes = line.as_bytes();

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'S' && i + 1 < bytes.len() && bytes[i + 1].is_ascii_digit() {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            let id = &line[i..j];

            let mut k = j;
            while k < bytes.len() && !bytes[k].is_ascii_digit() {
                k += 1;
            }
            let grade_start = k;
            while k < bytes.len() && bytes[k].is_ascii_digit() {
                k += 1;
            }
            if k == grade_start {
                // An identifier without a trailing number; no digits
                // remain, so no later candidate can match either.
                return None;
            }
            let grade = line[grade_start..k].parse::<u32>().ok()?;
            return Some((id.to_string(), grade));
        }
        i += 1;
    }

    None
}
