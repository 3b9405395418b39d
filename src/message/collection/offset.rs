//! Keys accepted by indexed writes.

/// Target slot for [`Messages::offset_set`](super::Messages::offset_set).
///
/// # Examples
///
/// ```
/// use messagebag::message::collection::Offset;
///
/// assert_eq!(Offset::from(3), Offset::Index(3));
/// assert_eq!(Offset::from(None::<usize>), Offset::Append);
/// assert_eq!(Offset::from(Some(1)), Offset::Index(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Offset {
    /// An explicit position.
    Index(usize),
    /// The next sequential position after the last message.
    Append,
}

impl From<usize> for Offset {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<Option<usize>> for Offset {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Self::Append, Self::Index)
    }
}
