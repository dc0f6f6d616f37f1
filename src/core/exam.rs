//! The exam calendar: which exams exist, how long they run, and how
//! their recorded scores map onto a common scale.

use crate::core::window::TimeWindow;
use serde::{Serialize, Serializer};

/// One of the three exams every subject sat.
///
/// The variant order doubles as the output sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Exam {
    Midterm1,
    Midterm2,
    Final,
}

impl Exam {
    /// All exams, in calendar order.
    pub const ALL: [Exam; 3] = [Exam::Midterm1, Exam::Midterm2, Exam::Final];

    /// Display name, also used as the per-exam folder name in the corpus
    /// and as the `exam_type` value in the output dataset.
    pub fn name(&self) -> &'static str {
        match self {
            Exam::Midterm1 => "Midterm 1",
            Exam::Midterm2 => "Midterm 2",
            Exam::Final => "Final",
        }
    }

    /// Literal section header introducing this exam's block in the grade
    /// report.
    pub fn section_header(&self) -> &'static str {
        match self {
            Exam::Midterm1 => "GRADES - MIDTERM 1",
            Exam::Midterm2 => "GRADES - MIDTERM 2",
            Exam::Final => "GRADES - FINAL",
        }
    }

    /// Scheduled exam length: 1.5 hours for midterms, 3 hours for the final.
    pub fn duration_minutes(&self) -> f64 {
        match self {
            Exam::Midterm1 | Exam::Midterm2 => 90.0,
            Exam::Final => 180.0,
        }
    }

    /// The whole-exam window `[0, duration)`.
    pub fn full_window(&self) -> TimeWindow {
        TimeWindow::new(0.0, self.duration_minutes())
    }

    /// Three equal consecutive thirds of the exam duration.
    pub fn thirds(&self) -> [TimeWindow; 3] {
        let third = self.duration_minutes() / 3.0;
        [
            TimeWindow::new(0.0, third),
            TimeWindow::new(third, 2.0 * third),
            TimeWindow::new(2.0 * third, 3.0 * third),
        ]
    }

    /// Divisor bringing this exam's recorded score onto the common
    /// 0-100 scale. The final is recorded out of 200 in the source
    /// report, so its raw scores are halved.
    pub fn grade_scale_divisor(&self) -> f64 {
        match self {
            Exam::Midterm1 | Exam::Midterm2 => 1.0,
            Exam::Final => 2.0,
        }
    }
}

impl std::fmt::Display for Exam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Exam {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations() {
        assert_eq!(Exam::Midterm1.duration_minutes(), 90.0);
        assert_eq!(Exam::Midterm2.duration_minutes(), 90.0);
        assert_eq!(Exam::Final.duration_minutes(), 180.0);
    }

    #[test]
    fn test_thirds_tile_the_duration() {
        for exam in Exam::ALL {
            let thirds = exam.thirds();
            assert_eq!(thirds[0].start_minute, 0.0);
            assert_eq!(thirds[0].end_minute, thirds[1].start_minute);
            assert_eq!(thirds[1].end_minute, thirds[2].start_minute);
            assert_eq!(thirds[2].end_minute, exam.duration_minutes());
            for window in thirds {
                assert_eq!(window.duration_minutes(), exam.duration_minutes() / 3.0);
            }
        }
    }

    #[test]
    fn test_midterm_thirds_are_thirty_minutes() {
        let thirds = Exam::Midterm1.thirds();
        assert_eq!(thirds[1].start_minute, 30.0);
        assert_eq!(thirds[1].end_minute, 60.0);
    }

    #[test]
    fn test_final_thirds_are_sixty_minutes() {
        let thirds = Exam::Final.thirds();
        assert_eq!(thirds[2].start_minute, 120.0);
        assert_eq!(thirds[2].end_minute, 180.0);
    }

    #[test]
    fn test_only_the_final_is_rescaled() {
        assert_eq!(Exam::Midterm1.grade_scale_divisor(), 1.0);
        assert_eq!(Exam::Midterm2.grade_scale_divisor(), 1.0);
        assert_eq!(Exam::Final.grade_scale_divisor(), 2.0);
    }

    #[test]
    fn test_calendar_order_is_sort_order() {
        assert!(Exam::Midterm1 < Exam::Midterm2);
        assert!(Exam::Midterm2 < Exam::Final);
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Exam::Midterm2).expect("serialize");
        assert_eq!(json, "\"Midterm 2\"");
    }
}
