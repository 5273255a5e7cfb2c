//! Remote data gateway
//!
//! Two calls against the records backend: list the selectable classes, and
//! fetch every course record for one student in one class. Each call is a
//! single request with no retry, pagination or caching.
//!
//! ```text
//! Gateway trait
//! ├── HttpGateway  (reqwest, the real backend)
//! └── DemoGateway  (canned payload for --demo)
//! ```
//!
//! Parsing lives in free functions so both implementations and the tests
//! share one definition of the wire format.

pub mod demo;
pub mod http;

pub use demo::DemoGateway;
pub use http::HttpGateway;

use crate::model::Course;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Errors raised by gateway calls.
///
/// "No data for this student" is not an error; see [`FetchOutcome::NoData`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    /// Network failure, or a non-success status on a call that has no
    /// no-data meaning
    #[error("Transport error: {0}")]
    Transport(String),
    /// The response arrived but did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Result of a course data fetch that reached the backend
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Status 200 with a parseable course array (possibly empty)
    Courses(Vec<Course>),
    /// Any other status: the student has no data in the requested class
    NoData { status: u16 },
}

/// Body of the course data request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseDataRequest {
    pub email: String,
    #[serde(rename = "encryptedEmail")]
    pub encrypted_email: String,
    pub class: String,
}

impl CourseDataRequest {
    /// Request for the logged-in identity
    pub fn for_identity(identity: &crate::session::Identity) -> Self {
        Self {
            email: identity.email.clone(),
            encrypted_email: identity.derived_id.clone(),
            class: identity.class_id.clone(),
        }
    }
}

/// Backend access used by the TUI and the headless commands
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Short name for logs and the status bar
    fn name(&self) -> &'static str;

    /// Names of the selectable classes, in backend order
    async fn list_classes(&self) -> Result<Vec<String>, GatewayError>;

    /// All course records for one student in one class
    async fn fetch_course_data(
        &self,
        request: &CourseDataRequest,
    ) -> Result<FetchOutcome, GatewayError>;
}

/// Outer envelope of the class list: the payload is a JSON document
/// serialized into the `body` string
#[derive(Debug, Deserialize)]
struct ClassListEnvelope {
    body: String,
}

#[derive(Debug, Deserialize)]
struct ClassList {
    folders: Vec<String>,
}

/// Parse the class list response body
pub fn parse_class_list(raw: &str) -> Result<Vec<String>, GatewayError> {
    let envelope: ClassListEnvelope = serde_json::from_str(raw)
        .map_err(|e| GatewayError::MalformedResponse(format!("class list envelope: {}", e)))?;

    let list: ClassList = serde_json::from_str(&envelope.body)
        .map_err(|e| GatewayError::MalformedResponse(format!("class list body: {}", e)))?;

    Ok(list.folders)
}

/// Interpret a course data response by status.
///
/// Only 200 counts as success. Every other status means the backend has
/// nothing for this student; the body is ignored.
pub fn parse_course_data(status: u16, raw: &str) -> Result<FetchOutcome, GatewayError> {
    if status != 200 {
        return Ok(FetchOutcome::NoData { status });
    }

    let courses: Vec<Course> = serde_json::from_str(raw)
        .map_err(|e| GatewayError::MalformedResponse(format!("course data: {}", e)))?;

    Ok(FetchOutcome::Courses(courses))
}
