//! Drill-down view model
//!
//! Holds the selection tuple (course, segment, month, days) as an immutable
//! snapshot. Every transition returns a fresh snapshot; the TUI swaps its
//! current one and re-renders. Rendering asks [`DrillDown::segment_view`]
//! for a render model instead of reading the payload directly.

use crate::attendance::{days_in_month, is_attendance_view, month_summary, DayEntry, MonthCount};
use crate::model::{display_cell, Course, Row, MASTER_SEGMENT};

/// Message shown when a course has no usable Master row
pub const NO_MASTER_DATA: &str = "No Master data available";

/// Selection state for the course detail pane
#[derive(Debug, Clone, PartialEq)]
pub struct DrillDown {
    /// Selected course (compared by value for highlighting)
    pub course: Option<Course>,
    /// Active segment; "Master" after every course change
    pub segment: String,
    /// Active month in the attendance drill-down
    pub month: Option<String>,
    /// Attended days for `month`
    pub days: Vec<DayEntry>,
}

impl Default for DrillDown {
    fn default() -> Self {
        Self {
            course: None,
            segment: MASTER_SEGMENT.to_string(),
            month: None,
            days: Vec::new(),
        }
    }
}

impl DrillDown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a course: segment back to Master, month and days cleared
    pub fn select_course(&self, course: &Course) -> Self {
        Self {
            course: Some(course.clone()),
            ..Self::default()
        }
    }

    /// Select a segment: month and days cleared.
    ///
    /// The name is not checked against the course; a missing segment is a
    /// render-time fallback, not a blocked transition.
    pub fn select_segment(&self, name: &str) -> Self {
        Self {
            course: self.course.clone(),
            segment: name.to_string(),
            month: None,
            days: Vec::new(),
        }
    }

    /// Select a month by full name and recompute the day list from the
    /// current course and segment only
    pub fn select_month(&self, month: &str) -> Self {
        let days = self
            .current_rows()
            .map(|rows| days_in_month(rows, month))
            .unwrap_or_default();

        Self {
            course: self.course.clone(),
            segment: self.segment.clone(),
            month: Some(month.to_string()),
            days,
        }
    }

    /// Whether `course` is the selected one (value equality, so duplicate
    /// courses highlight together)
    pub fn is_selected(&self, course: &Course) -> bool {
        self.course.as_ref() == Some(course)
    }

    /// Rows of the active segment of the selected course
    fn current_rows(&self) -> Option<Vec<&Row>> {
        self.course.as_ref()?.segment(&self.segment)
    }

    /// Month links for the attendance view, if the current pair qualifies
    pub fn month_summary(&self) -> Option<Vec<MonthCount>> {
        let course = self.course.as_ref()?;
        if !is_attendance_view(course, &self.segment) {
            return None;
        }
        Some(month_summary(self.current_rows()?))
    }

    /// Render model for the detail pane
    pub fn segment_view(&self) -> SegmentView<'_> {
        let Some(course) = self.course.as_ref() else {
            return SegmentView::NoCourse;
        };

        if self.segment == MASTER_SEGMENT {
            return match course.master_row() {
                Some(row) => SegmentView::Master(MasterSummary::from_row(row)),
                None => SegmentView::MasterAbsent,
            };
        }

        let Some(rows) = course.segment(&self.segment) else {
            return SegmentView::Missing(&self.segment);
        };

        if is_attendance_view(course, &self.segment) {
            return SegmentView::Attendance {
                months: month_summary(rows),
                selected_month: self.month.as_deref(),
                days: &self.days,
            };
        }

        SegmentView::Rows(rows)
    }
}

/// What the detail pane should draw for the current selection
#[derive(Debug, PartialEq)]
pub enum SegmentView<'a> {
    /// No course selected yet
    NoCourse,
    /// Master segment selected but the course carries no Master row
    MasterAbsent,
    /// Student information and scores overview
    Master(MasterSummary),
    /// Selected segment does not exist in the course data
    Missing(&'a str),
    /// Generic segment: one "Entry N" table per row
    Rows(Vec<&'a Row>),
    /// Attendance-shaped segment: month links and the active day list
    Attendance {
        months: Vec<MonthCount>,
        selected_month: Option<&'a str>,
        days: &'a [DayEntry],
    },
}

impl SegmentView<'_> {
    /// Plain-text rendering, used for clipboard export and headless output
    pub fn to_text(&self, segment: &str) -> String {
        let mut out = format!("## {}\n\n", segment);
        match self {
            SegmentView::NoCourse => out.push_str("Select a course.\n"),
            SegmentView::MasterAbsent => {
                out.push_str(NO_MASTER_DATA);
                out.push('\n');
            }
            SegmentView::Master(summary) => {
                for (title, fields) in summary.sections() {
                    out.push_str(&format!("{}\n", title));
                    for (label, value) in fields {
                        out.push_str(&format!("  {}: {}\n", label, value));
                    }
                    out.push('\n');
                }
            }
            SegmentView::Missing(name) => {
                out.push_str(&format!("No data available for {}\n", name));
            }
            SegmentView::Rows(rows) => {
                for (i, row) in rows.iter().enumerate() {
                    out.push_str(&format!("Entry {}\n", i + 1));
                    for (header, value) in row.iter() {
                        out.push_str(&format!("  {}: {}\n", header, display_cell(Some(value))));
                    }
                    out.push('\n');
                }
            }
            SegmentView::Attendance {
                months,
                selected_month,
                days,
            } => {
                for m in months {
                    out.push_str(&format!("{}: {}\n", m.month, m.present));
                }
                if let Some(month) = selected_month {
                    out.push_str(&format!("\n{}\n", month));
                    for day in days.iter() {
                        out.push_str(&format!("  {}: {}\n", day.date, day.value));
                    }
                }
            }
        }
        out
    }
}

/// Fixed fields lifted from the Master row
#[derive(Debug, Clone, PartialEq)]
pub struct MasterSummary {
    pub email: String,
    pub student_name: String,
    pub roll_number: String,
    pub participation_score: String,
    pub actual_score: String,
    pub total: String,
    pub grade: String,
}

impl MasterSummary {
    pub fn from_row(row: &Row) -> Self {
        let field = |name: &str| display_cell(row.get(name));
        Self {
            email: field("email"),
            student_name: field("Student name"),
            roll_number: field("Roll number"),
            participation_score: field("Participation score"),
            actual_score: field("Actual score"),
            total: field("Total"),
            grade: field("Grade"),
        }
    }

    /// Labelled sections in display order
    pub fn sections(&self) -> [(&'static str, Vec<(&'static str, &str)>); 2] {
        [
            (
                "Student Information",
                vec![
                    ("Email", self.email.as_str()),
                    ("Student Name", self.student_name.as_str()),
                    ("Roll Number", self.roll_number.as_str()),
                ],
            ),
            (
                "Scores Overview",
                vec![
                    ("Participation Score", self.participation_score.as_str()),
                    ("Actual Score", self.actual_score.as_str()),
                    ("Total", self.total.as_str()),
                    ("Grade", self.grade.as_str()),
                ],
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    fn attendance_course() -> Course {
        Course::new("[Master] Attendance")
            .with_segment("Master", vec![row(json!({ "Student name": "Asha" }))])
            .with_segment("Score scale", vec![row(json!({ "A": "90+" }))])
            .with_segment(
                "Attendance",
                vec![row(json!({
                    "Roll number": "21",
                    "Mon, Oct 7, 2024": "1",
                    "Tue, Oct 8, 2024": "0"
                }))],
            )
    }

    #[test]
    fn starts_on_master_with_nothing_selected() {
        let state = DrillDown::new();
        assert_eq!(state.segment, "Master");
        assert!(state.course.is_none());
        assert_eq!(state.segment_view(), SegmentView::NoCourse);
    }

    #[test]
    fn select_course_resets_segment_month_and_days() {
        let course = attendance_course();
        let deep = DrillDown::new()
            .select_course(&course)
            .select_segment("Attendance")
            .select_month("October");
        assert_eq!(deep.days.len(), 1);

        let other = Course::new("[Math] Algebra");
        for prior in [DrillDown::new(), deep.clone(), deep.select_segment("Score scale")] {
            let next = prior.select_course(&other);
            assert_eq!(next.segment, "Master");
            assert_eq!(next.month, None);
            assert!(next.days.is_empty());
            assert!(next.is_selected(&other));
        }
    }

    #[test]
    fn select_segment_clears_month_without_validation() {
        let state = DrillDown::new()
            .select_course(&attendance_course())
            .select_segment("Attendance")
            .select_month("October")
            .select_segment("Homework");

        assert_eq!(state.segment, "Homework");
        assert_eq!(state.month, None);
        assert!(state.days.is_empty());
        assert_eq!(state.segment_view(), SegmentView::Missing("Homework"));
    }

    #[test]
    fn select_month_uses_current_segment_only() {
        let state = DrillDown::new()
            .select_course(&attendance_course())
            .select_segment("Attendance")
            .select_month("October");

        assert_eq!(state.month.as_deref(), Some("October"));
        assert_eq!(
            state.days,
            vec![DayEntry {
                date: "Mon, Oct 7, 2024".to_string(),
                value: "1".to_string()
            }]
        );

        let elsewhere = state.select_segment("Score scale").select_month("October");
        assert!(elsewhere.days.is_empty());
    }

    #[test]
    fn attendance_segment_renders_month_links() {
        let state = DrillDown::new()
            .select_course(&attendance_course())
            .select_segment("Attendance");

        let summary = state.month_summary().unwrap();
        assert_eq!(summary[0].month, "October");
        assert_eq!(summary[0].present, 1);

        match state.segment_view() {
            SegmentView::Attendance {
                months,
                selected_month,
                days,
            } => {
                assert_eq!(months.len(), 1);
                assert_eq!(selected_month, None);
                assert!(days.is_empty());
            }
            other => panic!("expected attendance view, got {:?}", other),
        }

        assert!(state.select_segment("Score scale").month_summary().is_none());
    }

    #[test]
    fn missing_master_renders_fallback() {
        let no_master = Course::new("[Math] Algebra")
            .with_segment("Homework", vec![row(json!({ "Score": "9" }))]);
        let state = DrillDown::new().select_course(&no_master);
        assert_eq!(state.segment_view(), SegmentView::MasterAbsent);
        assert!(state.segment_view().to_text("Master").contains(NO_MASTER_DATA));

        let empty_master = Course::new("Art").with_segment("Master", vec![]);
        let state = DrillDown::new().select_course(&empty_master);
        assert_eq!(state.segment_view(), SegmentView::MasterAbsent);
    }

    #[test]
    fn master_summary_fills_gaps_with_sentinel() {
        let course = Course::new("Art").with_segment(
            "Master",
            vec![row(json!({
                "email": "asha@example.edu",
                "Student name": "Asha",
                "Total": "",
                "Grade": "A"
            }))],
        );
        let state = DrillDown::new().select_course(&course);

        let SegmentView::Master(summary) = state.segment_view() else {
            panic!("expected master view");
        };
        assert_eq!(summary.email, "asha@example.edu");
        assert_eq!(summary.roll_number, "N/A");
        assert_eq!(summary.total, "N/A");
        assert_eq!(summary.grade, "A");
    }

    #[test]
    fn generic_segment_lists_entries() {
        let course = Course::new("[Math] Algebra").with_segment(
            "Quizzes",
            vec![
                row(json!({ "Quiz": "1", "Score": null })),
                row(json!({ "Quiz": "2", "Score": "8" })),
            ],
        );
        let state = DrillDown::new().select_course(&course).select_segment("Quizzes");

        let view = state.segment_view();
        assert!(matches!(view, SegmentView::Rows(ref rows) if rows.len() == 2));

        let text = view.to_text("Quizzes");
        assert!(text.contains("Entry 1\n  Quiz: 1\n  Score: N/A"));
        assert!(text.contains("Entry 2"));
    }

    #[test]
    fn duplicates_co_highlight() {
        let a = Course::new("Art");
        let b = Course::new("Art");
        let state = DrillDown::new().select_course(&a);
        assert!(state.is_selected(&b));
    }
}
