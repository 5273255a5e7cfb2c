// Course records as delivered by the data API
//
// The payload is loosely structured: an array of courses, each holding a
// mapping from segment names ("Master", "Attendance", ...) to arrays of rows.
// Rows are plain JSON objects; we keep them as `serde_json::Map` so columns
// stay in the order the API sent them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Segment name that always carries the single roll/summary row
pub const MASTER_SEGMENT: &str = "Master";

/// Placeholder rendered for absent or empty cells
pub const MISSING_CELL: &str = "N/A";

/// One row of a segment: column name -> scalar value
pub type Row = Map<String, Value>;

/// A course and all of its data segments
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Course {
    /// Full course name, possibly carrying a bracketed category tag
    #[serde(
        rename = "course_name",
        alias = "courseName",
        default,
        deserialize_with = "null_as_default"
    )]
    pub course_name: String,

    /// Segment name -> rows
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Map<String, Value>,
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Course {
    pub fn new(course_name: impl Into<String>) -> Self {
        Self {
            course_name: course_name.into(),
            data: Map::new(),
        }
    }

    /// Builder used by the demo gateway and tests
    pub fn with_segment(mut self, name: impl Into<String>, rows: Vec<Row>) -> Self {
        let rows = rows.into_iter().map(Value::Object).collect();
        self.data.insert(name.into(), Value::Array(rows));
        self
    }

    /// Segment names in payload order
    pub fn segment_names(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Rows of a segment, or None when the segment is absent or not an array.
    ///
    /// Non-object entries inside the array are skipped.
    pub fn segment(&self, name: &str) -> Option<Vec<&Row>> {
        match self.data.get(name)? {
            Value::Array(items) => Some(items.iter().filter_map(Value::as_object).collect()),
            _ => None,
        }
    }

    /// The first Master row, if the course has one
    pub fn master_row(&self) -> Option<&Row> {
        self.segment(MASTER_SEGMENT)?.into_iter().next()
    }
}

/// Render a cell the way every table in the dashboard shows it.
///
/// Falsy values (null, false, zero, empty string) collapse to `N/A`.
/// The string "0" is kept here: it is a real score.
pub fn display_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING_CELL.to_string(),
        Some(Value::Bool(false)) => MISSING_CELL.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        Some(Value::String(s)) if s.is_empty() => MISSING_CELL.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => MISSING_CELL.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Presence-marker truthiness used by the attendance day list.
///
/// Null, false, numeric zero, "" and "0" count as "not present".
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty() && s != "0",
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Textual form of a cell, strings unquoted
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
