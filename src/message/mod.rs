//! Validation messages and the collection that aggregates them.
//!
//! # Architecture
//!
//! - **Ports**: the contract a message must satisfy ([`ports::message::MessageInterface`])
//! - **Domain**: the default message record ([`domain::Message`])
//! - **Collection**: the ordered container ([`collection::Messages`])
//! - **Errors**: typed failures ([`error::CollectionError`])
//!
//! # Example
//!
//! ```
//! use messagebag::message::collection::Messages;
//! use messagebag::message::domain::Message;
//!
//! let mut messages = Messages::new();
//! messages.append_messages([
//!     Message::new("Name is required").with_field("name"),
//!     Message::new("Email is invalid").with_field("email").with_kind("Email"),
//! ]);
//!
//! let records = messages.json_serialize();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1]["type"], "Email");
//! ```

pub mod collection;
pub mod domain;
pub mod error;
pub mod ports;

#[cfg(test)]
mod tests;
