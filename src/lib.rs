//! Messagebag: ordered collections of validation messages.
//!
//! Validators produce messages describing what went wrong with a given
//! field. This crate aggregates them in insertion order and exposes them
//! for indexed access, cursor-driven traversal, field filtering and
//! serialisation to plain structural records.
//!
//! # Modules
//!
//! - [`message`]: the message contract, the default message record and the
//!   collection

pub mod message;
