//! Demo gateway with a canned payload
//!
//! Lets the TUI be explored offline (`--demo`). The payload exercises every
//! render path: tagged and untagged courses, a pinned Master course, an
//! attendance course spanning two months and a course with no Master row.

use super::{CourseDataRequest, FetchOutcome, Gateway, GatewayError};
use crate::model::Course;
use async_trait::async_trait;
use serde_json::{json, Value};

/// Classes offered by the demo backend
pub const DEMO_CLASSES: [&str; 3] = ["CS-2024-A", "CS-2024-B", "EE-2024"];

/// Class the demo student has no data in
pub const DEMO_EMPTY_CLASS: &str = "EE-2024";

#[derive(Debug, Default)]
pub struct DemoGateway;

impl DemoGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Gateway for DemoGateway {
    fn name(&self) -> &'static str {
        "demo"
    }

    async fn list_classes(&self) -> Result<Vec<String>, GatewayError> {
        Ok(DEMO_CLASSES.iter().map(|c| c.to_string()).collect())
    }

    async fn fetch_course_data(
        &self,
        request: &CourseDataRequest,
    ) -> Result<FetchOutcome, GatewayError> {
        if request.class == DEMO_EMPTY_CLASS || !DEMO_CLASSES.contains(&request.class.as_str()) {
            return Ok(FetchOutcome::NoData { status: 404 });
        }
        let courses = demo_courses(&request.email)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
        Ok(FetchOutcome::Courses(courses))
    }
}

fn master_row(email: &str, participation: Value, actual: Value, total: Value, grade: &str) -> Value {
    json!({
        "email": email,
        "Student name": "Asha Rao",
        "Roll number": "CS24A017",
        "Participation score": participation,
        "Actual score": actual,
        "Total": total,
        "Grade": grade
    })
}

/// Canned course array for one student
pub fn demo_courses(email: &str) -> serde_json::Result<Vec<Course>> {
    serde_json::from_value(json!([
        {
            "course_name": "[Master] Attendance",
            "data": {
                "Master": [master_row(email, json!(9), json!(81), json!(90), "A")],
                "Attendance": [{
                    "email": email,
                    "Mon, Oct 7, 2024": "1",
                    "Tue, Oct 8, 2024": "0",
                    "Thu, Oct 10, 2024": "1",
                    "Mon, Oct 14, 2024": "1",
                    "Fri, Nov 1, 2024": "1",
                    "Mon, Nov 4, 2024": "",
                    "Wed, Nov 6, 2024": "1"
                }],
                "Score scale": [
                    { "Range": "90-100", "Grade": "A+" },
                    { "Range": "80-89", "Grade": "A" },
                    { "Range": "70-79", "Grade": "B" }
                ]
            }
        },
        {
            "course_name": "[Master] Roll",
            "data": {
                "Master": [master_row(email, json!(""), json!(null), json!(0), "N/A")]
            }
        },
        {
            "course_name": "[Math] Linear Algebra",
            "data": {
                "Master": [master_row(email, json!(8), json!(72), json!(80), "B+")],
                "Assignments": [
                    { "Assignment": "Vector spaces", "Score": 18, "Out of": 20 },
                    { "Assignment": "Eigenvalues", "Score": "0", "Out of": 20, "Remark": "" }
                ]
            }
        },
        {
            "course_name": "[Math] Calculus",
            "data": {
                "Master": [master_row(email, json!(10), json!(88), json!(98), "A+")],
                "Quizzes": [
                    { "Quiz": "Limits", "Score": 9 },
                    { "Quiz": "Series", "Score": 7 }
                ]
            }
        },
        {
            "course_name": "[Science] Physics Lab",
            "data": {
                "Labs": [
                    { "Experiment": "Pendulum", "Submitted": true },
                    { "Experiment": "Optics", "Submitted": false }
                ]
            }
        },
        {
            "course_name": "Communication Skills",
            "data": {
                "Master": [master_row(email, json!(7), json!(65), json!(72), "B")]
            }
        }
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorize::CategoryTree;

    fn request(class: &str) -> CourseDataRequest {
        CourseDataRequest {
            email: "asha@example.edu".to_string(),
            encrypted_email: crate::obfuscation::derive_id("asha@example.edu"),
            class: class.to_string(),
        }
    }

    #[tokio::test]
    async fn demo_payload_covers_every_view() {
        let outcome = DemoGateway::new()
            .fetch_course_data(&request("CS-2024-A"))
            .await
            .unwrap();
        let FetchOutcome::Courses(courses) = outcome else {
            panic!("expected courses");
        };

        let tree = CategoryTree::build(&courses);
        let categories: Vec<_> = tree.categories.keys().map(String::as_str).collect();
        assert_eq!(categories, vec!["Master", "Math", "Other", "Science"]);
        assert_eq!(tree.master_courses().count(), 2);
        assert!(courses.iter().any(|c| c.master_row().is_none()));
    }

    #[tokio::test]
    async fn empty_class_reports_no_data() {
        let gateway = DemoGateway::new();
        assert_eq!(
            gateway.fetch_course_data(&request(DEMO_EMPTY_CLASS)).await.unwrap(),
            FetchOutcome::NoData { status: 404 }
        );
        assert_eq!(gateway.list_classes().await.unwrap().len(), DEMO_CLASSES.len());
    }
}
