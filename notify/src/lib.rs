//! LEIMA - Selector-Safe Header Decoration
//!
//! Augments outgoing notification messages with copies of their dotted
//! header properties under identifier-safe names, so that downstream
//! consumers can filter with identifier-based selector expressions.
//!
//! # Message Flow
//!
//! ```text
//! Event ──► MessageFactory ──► SelectorHeaderFactory ──► transport
//!           (base headers)     (selector-safe copies)
//! ```
//!
//! Three pieces:
//!
//! - [`transform`] / [`IdentifierRules`] - deterministic name transformation
//!   (`org.fcrepo.jms.eventType` → `orgFcrepoJmsEventType`)
//! - [`DefaultMessageFactory`] - builds the baseline message with dotted
//!   headers and a JSON body
//! - [`SelectorHeaderFactory`] - wraps any factory and runs the decoration
//!   pass over its output

#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]

pub mod decorate;
pub mod factory;
pub mod selector;

pub use decorate::{DecorationReport, SelectorHeaderFactory};
pub use factory::DefaultMessageFactory;
pub use selector::{transform, IdentifierRules};

// Re-export the core seams so downstream crates only need leima-notify
pub use leima_core::{
    FactoryError, Message, MessageFactory, MessageId, NotificationEvent, PropertyError,
    PropertyValue, Session,
};
