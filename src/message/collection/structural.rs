//! Ingestion of messages from untyped structural data.
//!
//! Typed appends cannot carry a non-message value, so the message contract
//! is enforced here, where JSON-shaped input is decoded into `M`. Every
//! element of a group is decoded before any is stored.

use super::{Messages, Offset};
use crate::message::error::{CollectionError, CollectionResult};
use serde::{
    Deserialize, Deserializer,
    de::{DeserializeOwned, Error as _},
};
use serde_json::Value;
use tracing::debug;

impl<M: DeserializeOwned> Messages<M> {
    /// Rebuilds a collection from a captured structural state.
    ///
    /// `state` may be an array, kept in order, or an object whose keys are
    /// message indices in canonical decimal form (`"0"`, `"12"`, never
    /// `"01"` or `"+1"`), ordered numerically and re-indexed densely.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::TypeMismatch`] if `state` is neither shape,
    /// a key is not an index, or an element does not decode into a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use messagebag::message::collection::Messages;
    /// use messagebag::message::domain::Message;
    /// use serde_json::json;
    ///
    /// let messages: Messages<Message> = Messages::from_structural(&json!({
    ///     "1": { "message": "second" },
    ///     "0": { "message": "first", "field": "name" },
    /// }))
    /// .expect("valid state");
    ///
    /// assert_eq!(messages.count(), 2);
    /// assert_eq!(messages.get(0).map(Message::message), Some("first"));
    /// ```
    pub fn from_structural(state: &Value) -> CollectionResult<Self> {
        decode_group(state).map(Self::with_messages)
    }

    /// Decodes and appends a structural group of messages.
    ///
    /// Accepts the same shapes as [`from_structural`](Self::from_structural).
    /// Nothing is appended unless every element decodes.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::TypeMismatch`] if any element fails to
    /// decode; the collection is left unchanged.
    pub fn append_structural(&mut self, messages: &Value) -> CollectionResult<&mut Self> {
        let decoded = decode_group(messages)
            .inspect_err(|error| debug!(%error, "rejected structural message batch"))?;
        Ok(self.append_messages(decoded))
    }

    /// Decodes `message` and stores it at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::TypeMismatch`] if `message` is not an object
    /// decoding into a message, or [`CollectionError::IndexOutOfRange`] as
    /// for [`offset_set`](Self::offset_set).
    pub fn offset_set_structural(
        &mut self,
        offset: impl Into<Offset>,
        message: &Value,
    ) -> CollectionResult<()> {
        let decoded = decode_message(message, None)?;
        self.offset_set(offset, decoded)
    }
}

/// Decodes the same shapes as [`Messages::from_structural`].
impl<'de, M: DeserializeOwned> Deserialize<'de> for Messages<M> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let state = Value::deserialize(deserializer)?;
        Self::from_structural(&state).map_err(D::Error::custom)
    }
}

fn decode_group<M: DeserializeOwned>(group: &Value) -> CollectionResult<Vec<M>> {
    match group {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| decode_message(item, Some(index)))
            .collect(),
        Value::Object(entries) => {
            let mut keyed = entries
                .iter()
                .map(|(key, item)| {
                    parse_index(key).map(|index| (index, item)).ok_or_else(|| {
                        CollectionError::type_mismatch(format!(
                            "key `{key}` is not a message index"
                        ))
                    })
                })
                .collect::<CollectionResult<Vec<_>>>()?;
            keyed.sort_by_key(|&(index, _)| index);
            keyed
                .into_iter()
                .map(|(index, item)| decode_message(item, Some(index)))
                .collect()
        }
        other => Err(CollectionError::type_mismatch(format!(
            "messages must be a sequence or mapping, found {}",
            describe(other)
        ))),
    }
}

/// Accepts only the canonical decimal spelling, so no two keys share an index.
fn parse_index(key: &str) -> Option<usize> {
    key.parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == key)
}

fn decode_message<M: DeserializeOwned>(value: &Value, index: Option<usize>) -> CollectionResult<M> {
    let label = || index.map_or_else(|| "message".to_owned(), |i| format!("element {i}"));
    if !value.is_object() {
        return Err(CollectionError::type_mismatch(format!(
            "{} must be an object, found {}",
            label(),
            describe(value)
        )));
    }
    M::deserialize(value)
        .map_err(|error| CollectionError::type_mismatch(format!("{}: {error}", label())))
}

const fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
