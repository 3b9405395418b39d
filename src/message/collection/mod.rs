//! Ordered, cursor-aware message collection.
//!
//! [`Messages`] owns its messages and exposes indexed access, a shared
//! traversal cursor, bulk ingestion, field filtering and serialisation.

mod config;
mod messages;
mod offset;
mod structural;

pub use config::CollectionConfig;
pub use messages::Messages;
pub use offset::Offset;
