//! Port definitions for the message subsystem.
//!
//! Ports are the contracts the collection consumes. Concrete message types
//! live in [`crate::message::domain`].

pub mod message;
