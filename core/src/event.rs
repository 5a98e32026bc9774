//! The repository event that triggers an outgoing notification

use serde::Serialize;

/// A repository event to be published as a notification message
///
/// Carries the metadata the base factory turns into dotted header properties
/// plus the serialized body. Event types are dotted URIs
/// (e.g. `org.fcrepo.jms.ResourceCreation`), which is exactly why the
/// decoration pass in `leima-notify` exists.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationEvent {
    /// Unique event identifier
    pub event_id: String,

    /// Path of the resource the event concerns
    pub path: String,

    /// Dotted event-type URIs, comma-joined into a single header
    pub event_types: Vec<String>,

    /// Event time as Unix milliseconds
    pub timestamp_ms: i64,

    /// Base URL of the repository that emitted the event
    pub base_url: String,

    /// Acting user, when known
    pub user: Option<String>,

    /// User agent of the acting client, when known
    pub user_agent: Option<String>,
}

impl NotificationEvent {
    /// Create an event with the required fields
    pub fn new(
        event_id: impl Into<String>,
        path: impl Into<String>,
        timestamp_ms: i64,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            path: path.into(),
            event_types: Vec::new(),
            timestamp_ms,
            base_url: base_url.into(),
            user: None,
            user_agent: None,
        }
    }

    /// Add an event-type URI
    #[must_use]
    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_types.push(event_type.into());
        self
    }

    /// Set the acting user
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the acting client's user agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Path of the resource the event concerns
    pub fn path(&self) -> &str {
        &self.path
    }
}
