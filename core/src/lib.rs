//! leima-core - Core types for LEIMA selector-header decoration
//!
//! This crate provides the foundational types shared between the LEIMA
//! decoration pass and external factory/session implementations:
//!
//! - [`Message`] - the outgoing notification envelope (ordered, typed
//!   properties)
//! - [`MessageFactory`] / [`Session`] traits - the seams for message
//!   construction and transport
//! - [`NotificationEvent`] - the repository event that triggers a message
//! - [`PropertyError`] / [`FactoryError`] - the recoverable and fatal error
//!   channels
//! - [`headers`] - baseline dotted header-name constants
//!
//! # Why this crate exists
//!
//! Transport bindings implement [`Session`] and base factories implement
//! [`MessageFactory`]. Without `leima-core`, they would depend on
//! `leima-notify`, but `leima-notify` wraps those same factories, creating a
//! cyclic dependency. Extracting the envelope and the seams here breaks the
//! cycle:
//!
//! ```text
//! leima-core ◄── leima-notify
//!     ▲
//!     └────────── transport bindings / base factories
//! ```

#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]
#![warn(missing_docs)]

mod error;
mod event;
mod factory;
/// Baseline dotted header-name constants for LEIMA messages
pub mod headers;
/// The outgoing notification message envelope
pub mod message;

pub use error::{FactoryError, PropertyError};
pub use event::NotificationEvent;
pub use factory::{MessageFactory, Session};
pub use message::{Message, MessageId, PropertyValue};
