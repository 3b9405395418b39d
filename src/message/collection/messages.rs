//! The ordered message collection.

use super::{CollectionConfig, Offset};
use crate::message::{
    domain::Message,
    error::{CollectionError, CollectionResult},
    ports::message::{MessageInterface, StructuralRecord},
};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use tracing::{debug, trace};

/// An ordered collection of messages with a shared traversal cursor.
///
/// Messages keep their insertion order. Indices are always dense: removing
/// a message shifts every later message down by one.
///
/// # Cursor protocol
///
/// [`rewind`](Self::rewind), [`valid`](Self::valid), [`current`](Self::current),
/// [`key`](Self::key) and [`next`](Self::next) walk the collection through a
/// single cursor stored on the collection itself. The cursor reads live
/// contents: unsetting a message before the cursor mid-walk makes the walk
/// skip the message that slid into the cursor's slot. Only one cursor walk
/// can be in progress at a time. Use [`iter`](Self::iter) for an ordinary
/// borrow-checked iterator that leaves the cursor alone.
///
/// # Examples
///
/// ```
/// use messagebag::message::collection::Messages;
/// use messagebag::message::domain::Message;
///
/// let mut messages = Messages::new();
/// messages
///     .append_message(Message::new("Name is required").with_field("name"))
///     .append_message(Message::new("Email is invalid").with_field("email"));
///
/// assert_eq!(messages.count(), 2);
/// assert_eq!(messages.filter("email").len(), 1);
///
/// messages.rewind();
/// while let Some(message) = messages.current() {
///     assert!(!message.message().is_empty());
///     messages.next();
/// }
/// assert!(!messages.valid());
/// ```
#[derive(Debug, Clone)]
pub struct Messages<M = Message> {
    messages: Vec<M>,
    position: usize,
    config: CollectionConfig,
}

impl<M> Messages<M> {
    /// Creates an empty collection with the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(CollectionConfig::lenient())
    }

    /// Creates an empty collection with the given configuration.
    #[must_use]
    pub const fn with_config(config: CollectionConfig) -> Self {
        Self {
            messages: Vec::new(),
            position: 0,
            config,
        }
    }

    /// Creates a collection holding `messages` in the given order.
    ///
    /// The collection uses the default configuration; chain
    /// [`configured`](Self::configured) to change it.
    #[must_use]
    pub fn with_messages(messages: impl IntoIterator<Item = M>) -> Self {
        Self {
            messages: messages.into_iter().collect(),
            position: 0,
            config: CollectionConfig::lenient(),
        }
    }

    /// Rebuilds a collection from a previously captured group of messages.
    ///
    /// Equivalent to [`with_messages`](Self::with_messages); the cursor starts
    /// at zero regardless of where it was when the group was captured.
    ///
    /// The group carries no configuration, so the rebuilt collection is
    /// lenient. Carry a captured configuration over with
    /// [`configured`](Self::configured):
    ///
    /// ```
    /// use messagebag::message::collection::{CollectionConfig, Messages};
    ///
    /// let strict: Messages = Messages::with_config(CollectionConfig::strict());
    /// let rebuilt = Messages::reconstruct_from_state(strict.as_slice().to_vec())
    ///     .configured(strict.config());
    ///
    /// assert_eq!(rebuilt.config(), CollectionConfig::strict());
    /// ```
    #[must_use]
    pub fn reconstruct_from_state(group: impl IntoIterator<Item = M>) -> Self {
        Self::with_messages(group)
    }

    /// Replaces the configuration, keeping messages and cursor.
    #[must_use]
    pub const fn configured(mut self, config: CollectionConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> CollectionConfig {
        self.config
    }

    /// Appends a message, returning the collection for chaining.
    pub fn append_message(&mut self, message: M) -> &mut Self {
        self.messages.push(message);
        self
    }

    /// Appends every message from `messages` in order.
    pub fn append_messages(&mut self, messages: impl IntoIterator<Item = M>) -> &mut Self {
        self.messages.extend(messages);
        self
    }

    /// Returns the number of messages.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.messages.len()
    }

    /// Returns the number of messages.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` when the collection holds no messages.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the message under the cursor, if the cursor is in range.
    #[must_use]
    pub fn current(&self) -> Option<&M> {
        self.messages.get(self.position)
    }

    /// Returns the cursor position, whether or not it is in range.
    #[must_use]
    pub const fn key(&self) -> usize {
        self.position
    }

    /// Advances the cursor by one.
    ///
    /// Moving past the end is allowed; [`valid`](Self::valid) then reports
    /// `false`.
    pub const fn next(&mut self) {
        self.position = self.position.saturating_add(1);
    }

    /// Moves the cursor back to the first message.
    pub const fn rewind(&mut self) {
        self.position = 0;
    }

    /// Returns `true` if the cursor points at a message.
    #[must_use]
    pub const fn valid(&self) -> bool {
        self.position < self.messages.len()
    }

    /// Returns `true` if `index` refers to a message.
    #[must_use]
    pub const fn offset_exists(&self, index: usize) -> bool {
        index < self.messages.len()
    }

    /// Returns the message at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&M> {
        self.messages.get(index)
    }

    /// Returns the message at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index` is absent.
    pub fn offset_get(&self, index: usize) -> CollectionResult<&M> {
        self.messages
            .get(index)
            .ok_or_else(|| CollectionError::index_out_of_range(index, self.messages.len()))
    }

    /// Stores `message` at `offset`.
    ///
    /// An existing index is replaced in place. [`Offset::Append`], or an index
    /// equal to the current length, appends.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if the index lies beyond
    /// the next sequential position.
    ///
    /// # Examples
    ///
    /// ```
    /// use messagebag::message::collection::{Messages, Offset};
    /// use messagebag::message::domain::Message;
    ///
    /// let mut messages = Messages::new();
    /// messages.offset_set(Offset::Append, Message::new("first")).expect("append");
    /// messages.offset_set(0, Message::new("replaced")).expect("replace");
    ///
    /// assert_eq!(messages.count(), 1);
    /// assert!(messages.offset_set(5, Message::new("sparse")).is_err());
    /// ```
    pub fn offset_set(&mut self, offset: impl Into<Offset>, message: M) -> CollectionResult<()> {
        let len = self.messages.len();
        match offset.into() {
            Offset::Append => self.messages.push(message),
            Offset::Index(index) if index == len => self.messages.push(message),
            Offset::Index(index) => {
                let slot = self
                    .messages
                    .get_mut(index)
                    .ok_or_else(|| CollectionError::index_out_of_range(index, len))?;
                *slot = message;
            }
        }
        Ok(())
    }

    /// Removes and returns the message at `index`, shifting later messages
    /// down by one.
    ///
    /// A missing index yields `Ok(None)` unless the collection was built with
    /// [`CollectionConfig::strict`].
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] for a missing index under
    /// a strict configuration.
    pub fn offset_unset(&mut self, index: usize) -> CollectionResult<Option<M>> {
        let len = self.messages.len();
        if index < len {
            return Ok(Some(self.messages.remove(index)));
        }
        if self.config.strict_unset {
            debug!(index, len, "rejected unset of missing message index");
            return Err(CollectionError::index_out_of_range(index, len));
        }
        trace!(index, len, "ignored unset of missing message index");
        Ok(None)
    }

    /// Returns an iterator over the messages that does not move the cursor.
    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.messages.iter()
    }

    /// Returns the messages as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[M] {
        &self.messages
    }

    /// Consumes the collection, returning its messages.
    #[must_use]
    pub fn into_inner(self) -> Vec<M> {
        self.messages
    }
}

impl<M: MessageInterface> Messages<M> {
    /// Returns the messages whose field equals `field_name`, in order.
    ///
    /// Messages without a field never match.
    #[must_use]
    pub fn filter(&self, field_name: &str) -> Vec<&M> {
        self.messages
            .iter()
            .filter(|message| message.field() == Some(field_name))
            .collect()
    }

    /// Returns the structural form of every message, in order.
    #[must_use]
    pub fn json_serialize(&self) -> Vec<StructuralRecord> {
        self.messages
            .iter()
            .map(MessageInterface::to_structural)
            .collect()
    }
}

impl<M> Default for Messages<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Collections compare by their messages; cursor and configuration are
/// ignored.
impl<M: PartialEq> PartialEq for Messages<M> {
    fn eq(&self, other: &Self) -> bool {
        self.messages == other.messages
    }
}

impl<M: Eq> Eq for Messages<M> {}

impl<M> FromIterator<M> for Messages<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self::with_messages(iter)
    }
}

impl<M> Extend<M> for Messages<M> {
    fn extend<I: IntoIterator<Item = M>>(&mut self, iter: I) {
        self.append_messages(iter);
    }
}

impl<M> IntoIterator for Messages<M> {
    type Item = M;
    type IntoIter = std::vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a, M> IntoIterator for &'a Messages<M> {
    type Item = &'a M;
    type IntoIter = std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl<M: MessageInterface> Serialize for Messages<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.messages.len()))?;
        for message in &self.messages {
            seq.serialize_element(&message.to_structural())?;
        }
        seq.end()
    }
}
