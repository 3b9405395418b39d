//! Message contract consumed by the collection.
//!
//! The collection never inspects a message beyond the two capabilities
//! defined here: the field it relates to, and its structural form.

use serde_json::{Map, Value};

/// Plain, encoder-agnostic representation of a single message.
///
/// An ordered mapping of named values that can be handed to `serde_json` or
/// any other serde encoder.
pub type StructuralRecord = Map<String, Value>;

/// Port describing what the collection requires from a message.
///
/// # Examples
///
/// ```
/// use messagebag::message::ports::message::{MessageInterface, StructuralRecord};
/// use serde_json::Value;
///
/// struct Required(&'static str);
///
/// impl MessageInterface for Required {
///     fn field(&self) -> Option<&str> {
///         Some(self.0)
///     }
///
///     fn to_structural(&self) -> StructuralRecord {
///         let mut record = StructuralRecord::new();
///         record.insert("field".to_owned(), Value::from(self.0));
///         record
///     }
/// }
///
/// assert_eq!(Required("email").field(), Some("email"));
/// ```
pub trait MessageInterface {
    /// Returns the name of the field this message refers to, if any.
    fn field(&self) -> Option<&str>;

    /// Returns the structural form used for serialisation.
    fn to_structural(&self) -> StructuralRecord;
}

impl<M: MessageInterface + ?Sized> MessageInterface for Box<M> {
    fn field(&self) -> Option<&str> {
        (**self).field()
    }

    fn to_structural(&self) -> StructuralRecord {
        (**self).to_structural()
    }
}
