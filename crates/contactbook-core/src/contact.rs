use crate::constants::{FIELD_EMAIL, FIELD_NAME, FIELD_PHONE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A persisted contact
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Assigned by the store, never changes after creation
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The business fields of a contact that passed validation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactFields {
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        Self {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
        }
    }
}

/// Where a candidate row was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSource {
    Spreadsheet,
    Json,
}

impl RowSource {
    /// The label used when reporting a failing row
    pub fn label(&self) -> &'static str {
        match self {
            RowSource::Spreadsheet => "Row",
            RowSource::Json => "Item",
        }
    }
}

/// A candidate contact as extracted from a spreadsheet row or a JSON record.
/// Any field may be missing until the record is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactRecord {
    /// Reads the `name`, `email` and `phone` fields of a JSON object. Anything that is not an
    /// object yields a record without fields.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                name: map.get(FIELD_NAME).and_then(json_value_to_text),
                email: map.get(FIELD_EMAIL).and_then(json_value_to_text),
                phone: map.get(FIELD_PHONE).and_then(json_value_to_text),
            },
            _ => Self::default(),
        }
    }
}

impl From<ContactFields> for ContactRecord {
    fn from(value: ContactFields) -> Self {
        Self {
            name: Some(value.name),
            email: Some(value.email),
            phone: Some(value.phone),
        }
    }
}

// numbers and booleans are taken by their textual form, null counts as absent
fn json_value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.to_owned()),
        other => Some(other.to_string()),
    }
}
