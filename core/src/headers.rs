//! Baseline header property names for LEIMA messages
//!
//! These are the dotted, namespaced names the base factory sets on every
//! outgoing message. Dotted names are not viable selector identifiers, which
//! is why the decoration pass adds identifier-safe copies of them.

/// Path of the resource the event concerns
pub const IDENTIFIER: &str = "org.fcrepo.jms.identifier";

/// Comma-joined event-type URIs
pub const EVENT_TYPE: &str = "org.fcrepo.jms.eventType";

/// Event time as Unix milliseconds (decimal string)
pub const TIMESTAMP: &str = "org.fcrepo.jms.timestamp";

/// Base URL of the repository that emitted the event
pub const BASE_URL: &str = "org.fcrepo.jms.baseURL";

/// Acting user, set only when known
pub const USER: &str = "org.fcrepo.jms.user";

/// User agent of the acting client, set only when known
pub const USER_AGENT: &str = "org.fcrepo.jms.userAgent";

/// Unique event identifier
pub const EVENT_ID: &str = "org.fcrepo.jms.eventID";
