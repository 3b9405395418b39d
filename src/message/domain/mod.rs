//! Domain types for the message subsystem.
//!
//! This module contains pure domain types with no infrastructure dependencies.

mod message;

pub use message::Message;
