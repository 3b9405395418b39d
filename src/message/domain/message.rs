//! The default message record produced by validators.
//!
//! A message carries human-readable text, the field it refers to, a
//! validator-defined type, a numeric code and free-form metadata.

use crate::message::ports::message::{MessageInterface, StructuralRecord};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A single validation or result message.
///
/// # Serialisation
///
/// Messages serialise to a flat record:
///
/// ```json
/// { "field": "email", "message": "Email is required", "type": "PresenceOf", "code": 0, "metaData": {} }
/// ```
///
/// `field` is `null` when the message is not tied to a field. Only `message`
/// is required when deserialising; the remaining keys fall back to their
/// defaults.
///
/// # Examples
///
/// ```
/// use messagebag::message::domain::Message;
/// use messagebag::message::ports::message::MessageInterface;
///
/// let message = Message::new("Email is required")
///     .with_field("email")
///     .with_kind("PresenceOf");
///
/// assert_eq!(message.field(), Some("email"));
/// assert_eq!(message.to_string(), "Email is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The field this message refers to.
    #[serde(default)]
    field: Option<String>,

    /// Human-readable text.
    message: String,

    /// Validator-defined message type, e.g. `PresenceOf`.
    #[serde(rename = "type", default)]
    kind: String,

    /// Numeric code attached by the producer.
    #[serde(default)]
    code: i64,

    /// Extension data supplied by the producer.
    #[serde(rename = "metaData", default)]
    metadata: Map<String, Value>,
}

impl Message {
    /// Creates a message with the given text and no field, type or code.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
            kind: String::new(),
            code: 0,
            metadata: Map::new(),
        }
    }

    /// Sets the field this message refers to.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Sets the message type.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the numeric code.
    #[must_use]
    pub const fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    /// Adds a metadata entry, replacing any previous value under `key`.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the message type.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the numeric code.
    #[must_use]
    pub const fn code(&self) -> i64 {
        self.code
    }

    /// Returns the metadata map.
    #[must_use]
    pub const fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }
}

impl MessageInterface for Message {
    fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    fn to_structural(&self) -> StructuralRecord {
        let mut record = StructuralRecord::new();
        record.insert(
            "field".to_owned(),
            self.field.clone().map_or(Value::Null, Value::String),
        );
        record.insert("message".to_owned(), Value::String(self.message.clone()));
        record.insert("type".to_owned(), Value::String(self.kind.clone()));
        record.insert("code".to_owned(), Value::from(self.code));
        record.insert("metaData".to_owned(), Value::Object(self.metadata.clone()));
        record
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
