// Attendance rules
//
// Attendance segments store one column per class day, named like
// "Mon, Oct 7, 2024", with a presence marker as the value. Everything here is
// a pure function over column names and rows.

use crate::categorize::display_name;
use crate::model::{cell_text, is_truthy, Course, Row, MASTER_SEGMENT};
use regex::Regex;
use std::sync::OnceLock;

/// Course display name that switches on the attendance view
pub const ATTENDANCE_COURSE: &str = "Attendance";

/// Segment excluded from the attendance view besides Master
pub const SCORE_SCALE_SEGMENT: &str = "Score scale";

/// Marker counted as "attended" in the month summary
pub const PRESENT_MARKER: &str = "1";

const MONTHS: [(&str, &str); 12] = [
    ("Jan", "January"),
    ("Feb", "February"),
    ("Mar", "March"),
    ("Apr", "April"),
    ("May", "May"),
    ("Jun", "June"),
    ("Jul", "July"),
    ("Aug", "August"),
    ("Sep", "September"),
    ("Oct", "October"),
    ("Nov", "November"),
    ("Dec", "December"),
];

fn re_date_column() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun), (Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) ([1-9]|[12][0-9]|3[01]), (\d{4})$",
        )
        .unwrap()
    })
}

/// Whether a column name is a day column ("Ddd, Mmm D, YYYY", nothing looser)
pub fn is_date_column(column: &str) -> bool {
    re_date_column().is_match(column)
}

/// Three-letter month abbreviation embedded in a day column
pub fn column_month(column: &str) -> Option<&str> {
    re_date_column()
        .captures(column)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// "Oct" -> "October"
pub fn full_month_name(abbrev: &str) -> Option<&'static str> {
    MONTHS
        .iter()
        .find(|(short, _)| *short == abbrev)
        .map(|(_, full)| *full)
}

/// "October" -> "Oct" (first three characters)
pub fn abbreviate_month(full: &str) -> &str {
    match full.char_indices().nth(3) {
        Some((end, _)) => &full[..end],
        None => full,
    }
}

/// Whether the current course/segment pair gets the month/day drill-down.
///
/// Closed rule: the course must display as exactly "Attendance" and the
/// segment must be neither Master nor Score scale.
pub fn is_attendance_view(course: &Course, segment: &str) -> bool {
    display_name(&course.course_name) == ATTENDANCE_COURSE
        && segment != MASTER_SEGMENT
        && segment != SCORE_SCALE_SEGMENT
}

/// Per-month count of "1" markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCount {
    pub month: &'static str,
    pub present: usize,
}

/// One attended day in a month drill-down
#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub date: String,
    pub value: String,
}

/// Month summary in first-encountered order (not calendar order).
///
/// A month appears as soon as any of its day columns is seen, even if none
/// of its values is the present marker.
pub fn month_summary<'a>(rows: impl IntoIterator<Item = &'a Row>) -> Vec<MonthCount> {
    let mut summary: Vec<MonthCount> = Vec::new();

    for row in rows {
        for (column, value) in row {
            let Some(month) = column_month(column).and_then(full_month_name) else {
                continue;
            };

            let idx = match summary.iter().position(|m| m.month == month) {
                Some(idx) => idx,
                None => {
                    summary.push(MonthCount { month, present: 0 });
                    summary.len() - 1
                }
            };

            if value.as_str() == Some(PRESENT_MARKER) {
                summary[idx].present += 1;
            }
        }
    }

    summary
}

/// Truthy day entries for one month, in row order then column order
pub fn days_in_month<'a>(rows: impl IntoIterator<Item = &'a Row>, month: &str) -> Vec<DayEntry> {
    let target = abbreviate_month(month);

    rows.into_iter()
        .flat_map(|row| row.iter())
        .filter(|(column, _)| column_month(column) == Some(target))
        .filter(|(_, value)| is_truthy(Some(*value)))
        .map(|(column, value)| DayEntry {
            date: column.clone(),
            value: cell_text(value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn date_columns_match_strictly() {
        assert!(is_date_column("Mon, Oct 7, 2024"));
        assert!(is_date_column("Sat, Feb 29, 2020"));
        assert!(!is_date_column("Mon, Oct 07, 2024"));
        assert!(!is_date_column("Monday, Oct 7, 2024"));
        assert!(!is_date_column("Mon Oct 7 2024"));
        assert!(!is_date_column("mon, oct 7, 2024"));
        assert!(!is_date_column(" Mon, Oct 7, 2024"));
        assert!(!is_date_column("Roll number"));
    }

    #[test]
    fn month_names_round_trip_through_lookup() {
        assert_eq!(column_month("Tue, Nov 12, 2024"), Some("Nov"));
        assert_eq!(full_month_name("Nov"), Some("November"));
        assert_eq!(abbreviate_month("November"), "Nov");
        assert_eq!(abbreviate_month("May"), "May");
        assert_eq!(full_month_name("Foo"), None);
    }

    #[test]
    fn october_example_counts_one_and_skips_falsy_day() {
        let rows = [row(json!({
            "Mon, Oct 7, 2024": "1",
            "Tue, Oct 8, 2024": "0"
        }))];

        let summary = month_summary(rows.iter());
        assert_eq!(
            summary,
            vec![MonthCount {
                month: "October",
                present: 1
            }]
        );

        let days = days_in_month(rows.iter(), "October");
        assert_eq!(
            days,
            vec![DayEntry {
                date: "Mon, Oct 7, 2024".to_string(),
                value: "1".to_string()
            }]
        );
    }

    #[test]
    fn only_the_string_marker_counts_as_present() {
        let rows = [row(json!({
            "Mon, Oct 7, 2024": 1,
            "Tue, Oct 8, 2024": true,
            "Thu, Oct 10, 2024": "1"
        }))];

        let summary = month_summary(rows.iter());
        assert_eq!(summary[0].present, 1);
        // Numeric and boolean markers still list as attended days
        assert_eq!(days_in_month(rows.iter(), "October").len(), 3);
    }

    #[test]
    fn months_keep_first_encountered_order() {
        let rows = [
            row(json!({ "Student name": "A", "Mon, Nov 4, 2024": "1" })),
            row(json!({ "Mon, Sep 2, 2024": "0", "Tue, Nov 5, 2024": "1" })),
            row(json!({ "Wed, Oct 2, 2024": "1" })),
        ];

        let summary = month_summary(rows.iter());
        let months: Vec<_> = summary.iter().map(|m| m.month).collect();
        assert_eq!(months, vec!["November", "September", "October"]);
        assert_eq!(summary[0].present, 2);
        assert_eq!(summary[1].present, 0);
    }

    #[test]
    fn day_list_is_not_sorted_or_deduplicated() {
        let rows = [
            row(json!({ "Thu, Oct 10, 2024": "1", "Mon, Oct 7, 2024": "P" })),
            row(json!({ "Mon, Oct 7, 2024": "1", "Fri, Nov 1, 2024": "1" })),
        ];

        let dates: Vec<_> = days_in_month(rows.iter(), "October")
            .into_iter()
            .map(|d| d.date)
            .collect();
        assert_eq!(
            dates,
            vec!["Thu, Oct 10, 2024", "Mon, Oct 7, 2024", "Mon, Oct 7, 2024"]
        );
    }

    #[test]
    fn attendance_view_is_a_closed_rule() {
        let attendance = Course::new("[Master] Attendance");
        assert!(is_attendance_view(&attendance, "Attendance"));
        assert!(is_attendance_view(&attendance, "Section B"));
        assert!(!is_attendance_view(&attendance, "Master"));
        assert!(!is_attendance_view(&attendance, "Score scale"));

        assert!(!is_attendance_view(&Course::new("Attendance Log"), "Sheet1"));
        assert!(!is_attendance_view(&Course::new("[Math] Algebra"), "Attendance"));
    }
}
