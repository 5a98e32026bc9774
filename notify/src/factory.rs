//! Default base-message factory
//!
//! Builds the baseline outgoing message for an event: allocates a message on
//! the session, serializes the event as the JSON body, and sets the dotted
//! header properties from [`leima_core::headers`]. The selector-header
//! decorator wraps this (or any other [`MessageFactory`]) to add the
//! identifier-safe copies.

use bytes::Bytes;
use leima_core::{headers, FactoryError, Message, MessageFactory, NotificationEvent, Session};

/// Builds the baseline message with dotted headers and a JSON body
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessageFactory;

impl DefaultMessageFactory {
    /// Create the default factory
    pub fn new() -> Self {
        Self
    }
}

impl MessageFactory for DefaultMessageFactory {
    fn name(&self) -> &'static str {
        "default"
    }

    fn message(
        &self,
        event: &NotificationEvent,
        session: &dyn Session,
    ) -> Result<Message, FactoryError> {
        let mut message = session.create_message()?;

        let body = serde_json::to_vec(event).map_err(|e| FactoryError::Build(e.to_string()))?;
        message.body = Bytes::from(body);

        message.set_string_property(headers::IDENTIFIER, event.path())?;
        message.set_string_property(headers::EVENT_TYPE, event.event_types.join(","))?;
        message.set_string_property(headers::TIMESTAMP, event.timestamp_ms.to_string())?;
        message.set_string_property(headers::BASE_URL, &event.base_url)?;
        if let Some(user) = &event.user {
            message.set_string_property(headers::USER, user)?;
        }
        if let Some(agent) = &event.user_agent {
            message.set_string_property(headers::USER_AGENT, agent)?;
        }
        message.set_string_property(headers::EVENT_ID, &event.event_id)?;

        Ok(message)
    }
}
