// Course data state for the authenticated screen
//
// Holds the raw course array for the logged-in student, the tree derived
// from it and the message shown when there is nothing to show. Results are
// applied in arrival order; a late response overwrites an earlier one.

use crate::categorize::CategoryTree;
use crate::gateway::{FetchOutcome, GatewayError};
use crate::model::Course;

/// Shown when the backend has no data for the student in the chosen class
pub const NO_DATA_MESSAGE: &str =
    "Your data is not present in the requested class. Contact LMS team.";

/// Shown when the request failed or the response could not be read
pub const FETCH_ERROR_MESSAGE: &str =
    "An error occurred while fetching your data. Please try again later.";

#[derive(Debug, Clone, Default)]
pub struct CourseData {
    pub loading: bool,
    pub courses: Option<Vec<Course>>,
    pub tree: CategoryTree,
    pub user_message: Option<String>,
}

impl CourseData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as in flight. Existing data stays visible until the
    /// result arrives.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Apply a fetch result. Every outcome ends loading.
    pub fn apply(&mut self, result: Result<FetchOutcome, GatewayError>) {
        self.loading = false;

        match result {
            Ok(FetchOutcome::Courses(courses)) => {
                tracing::info!(count = courses.len(), "Course data loaded");
                self.tree = CategoryTree::build(&courses);
                self.courses = Some(courses);
                self.user_message = None;
            }
            Ok(FetchOutcome::NoData { status }) => {
                tracing::warn!(status, "No course data for student in class");
                self.clear_with(NO_DATA_MESSAGE);
            }
            Err(e) => {
                tracing::error!(error = %e, "Course data fetch failed");
                self.clear_with(FETCH_ERROR_MESSAGE);
            }
        }
    }

    /// Forget everything (logout)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_courses(&self) -> bool {
        self.courses.as_ref().is_some_and(|c| !c.is_empty())
    }

    fn clear_with(&mut self, message: &str) {
        self.courses = None;
        self.tree = CategoryTree::default();
        self.user_message = Some(message.to_string());
    }
}
