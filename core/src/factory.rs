//! Factory and session seams for message construction
//!
//! The [`MessageFactory`] trait is the core abstraction for message
//! construction in LEIMA. A factory takes a repository event and a transport
//! session and produces the outgoing [`Message`]. Factories compose: the
//! selector-header decorator in `leima-notify` is itself a factory that wraps
//! an inner one and augments its output.
//!
//! ```text
//! Event ──► MessageFactory ──► Decorator ──► transport
//!           (base headers)     (selector-safe copies)
//! ```

use crate::error::FactoryError;
use crate::event::NotificationEvent;
use crate::message::Message;

/// Transport session abstraction
///
/// Messages are allocated on the session that will eventually send them.
/// LEIMA never interprets the session beyond this; factories receive it and
/// pass it through unmodified.
pub trait Session: Send + Sync {
    /// Allocate an empty message on this session
    ///
    /// # Errors
    /// [`FactoryError::Session`] if the underlying transport cannot provide
    /// a message (e.g. the connection is closed).
    fn create_message(&self) -> Result<Message, FactoryError>;
}

/// MessageFactory trait - builds the outgoing message for an event
///
/// # Implementing a factory
///
/// ```ignore
/// use leima_core::{FactoryError, Message, MessageFactory, NotificationEvent, Session};
///
/// struct MyFactory;
///
/// impl MessageFactory for MyFactory {
///     fn name(&self) -> &'static str {
///         "my-factory"
///     }
///
///     fn message(
///         &self,
///         event: &NotificationEvent,
///         session: &dyn Session,
///     ) -> Result<Message, FactoryError> {
///         let mut msg = session.create_message()?;
///         msg.set_string_property("org.example.id", &event.event_id)?;
///         Ok(msg)
///     }
/// }
/// ```
///
/// Construction is synchronous and non-blocking; a factory call is expected
/// to complete in time proportional to the size of the event.
pub trait MessageFactory: Send + Sync {
    /// Unique name for this factory (for logging)
    fn name(&self) -> &'static str;

    /// Build the outgoing message for `event`
    ///
    /// # Errors
    /// [`FactoryError`] if the message cannot be built at all. Factory errors
    /// are fatal for the event: wrappers propagate them unchanged rather than
    /// attempting partial construction.
    fn message(
        &self,
        event: &NotificationEvent,
        session: &dyn Session,
    ) -> Result<Message, FactoryError>;
}

impl<F: MessageFactory + ?Sized> MessageFactory for Box<F> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn message(
        &self,
        event: &NotificationEvent,
        session: &dyn Session,
    ) -> Result<Message, FactoryError> {
        (**self).message(event, session)
    }
}
