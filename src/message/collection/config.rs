//! Behavioural configuration for message collections.

/// Configuration for a [`Messages`](super::Messages) collection.
///
/// # Examples
///
/// ```
/// use messagebag::message::collection::CollectionConfig;
///
/// let config = CollectionConfig::default();
/// assert!(!config.strict_unset);
///
/// let strict = CollectionConfig::strict();
/// assert!(strict.strict_unset);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectionConfig {
    /// Whether unsetting a missing index fails instead of doing nothing.
    pub strict_unset: bool,
}

impl CollectionConfig {
    /// Creates a lenient configuration where unsetting a missing index is a
    /// no-op.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            strict_unset: false,
        }
    }

    /// Creates a strict configuration where unsetting a missing index fails
    /// with [`CollectionError::IndexOutOfRange`](crate::message::error::CollectionError::IndexOutOfRange).
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict_unset: true }
    }
}
