//! The outgoing notification message envelope
//!
//! A [`Message`] is a mutable, ordered collection of named, typed properties
//! plus an opaque body. Properties are what downstream consumers filter on:
//! brokers evaluate selector expressions against property names, which is why
//! the decoration pass in `leima-notify` adds identifier-safe copies of the
//! dotted ones.
//!
//! # Ordering
//!
//! Properties enumerate in insertion order. Overwriting an existing property
//! keeps its original position, so a decoration pass that snapshots the names
//! up front sees a stable view even while it appends.

use bytes::Bytes;
use indexmap::IndexMap;
use std::fmt;

use crate::error::PropertyError;

/// Compact unique message identifier backed by a ULID
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(ulid::Ulid);

impl MessageId {
    /// Generate a new unique ID
    #[inline]
    pub fn new() -> Self {
        Self(ulid::Ulid::new())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageId({})", self.0)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A typed property value
///
/// Notification transports carry more than strings; selectors, however, are
/// only defined over string properties, so the decoration pass reads values
/// through [`Message::string_property`] and treats any other variant as a
/// per-property failure.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// UTF-8 string value
    Str(String),
    /// Boolean value
    Bool(bool),
    /// 32-bit signed integer value
    Int(i32),
    /// 64-bit signed integer value
    Long(i64),
    /// 64-bit floating point value
    Double(f64),
}

impl PropertyValue {
    /// Variant name for error messages and logging
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Double(_) => "double",
        }
    }

    /// Borrow the string value, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        Self::Int(i)
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        Self::Long(i)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        Self::Double(f)
    }
}

/// The outgoing notification message envelope
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use leima_core::Message;
///
/// let mut msg = Message::new(Bytes::from(r#"{"id": 1}"#));
/// msg.set_string_property("org.example.event.type", "created").unwrap();
/// assert_eq!(msg.string_property("org.example.event.type").unwrap(), "created");
/// ```
#[derive(Debug, Clone)]
pub struct Message {
    /// Unique identifier
    pub id: MessageId,

    /// Unix timestamp in nanoseconds, set at creation
    pub timestamp: i64,

    /// Opaque body - zero-copy via Bytes
    ///
    /// LEIMA doesn't interpret this. Factories serialize whatever
    /// representation of the event their transport expects.
    pub body: Bytes,

    /// Named, typed properties in insertion order
    properties: IndexMap<String, PropertyValue>,
}

impl Message {
    /// Create a new Message with auto-generated ID, current timestamp, and no
    /// properties
    pub fn new(body: Bytes) -> Self {
        Self {
            id: MessageId::new(),
            timestamp: chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0),
            body,
            properties: IndexMap::new(),
        }
    }

    /// Iterate property names in insertion order
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Number of properties on the message
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Whether a property with this name exists
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Get a property value by name
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Read a string property by name
    ///
    /// # Errors
    /// - [`PropertyError::NotFound`] if no property has this name
    /// - [`PropertyError::TypeMismatch`] if the property holds a non-string
    ///   value
    pub fn string_property(&self, name: &str) -> Result<&str, PropertyError> {
        let value = self
            .properties
            .get(name)
            .ok_or_else(|| PropertyError::NotFound {
                name: name.to_string(),
            })?;
        value.as_str().ok_or_else(|| PropertyError::TypeMismatch {
            name: name.to_string(),
            actual: value.type_name(),
        })
    }

    /// Set a property, overwriting any existing property of that name
    ///
    /// Overwriting keeps the property's original position in the enumeration
    /// order.
    ///
    /// # Errors
    /// [`PropertyError::EmptyName`] if `name` is empty. Transports reject
    /// empty property names, and the identifier transform maps all-illegal
    /// names to the empty string, so the check has to live here.
    pub fn set_property(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Result<(), PropertyError> {
        let name = name.into();
        if name.is_empty() {
            return Err(PropertyError::EmptyName);
        }
        self.properties.insert(name, value.into());
        Ok(())
    }

    /// Set a string property, overwriting any existing property of that name
    ///
    /// # Errors
    /// [`PropertyError::EmptyName`] if `name` is empty.
    pub fn set_string_property(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), PropertyError> {
        self.set_property(name, PropertyValue::Str(value.into()))
    }

    /// Builder-style property setter for factories and tests
    ///
    /// An empty name is silently ignored; use [`Message::set_property`] when
    /// the name is not a known-good literal.
    #[must_use]
    pub fn with_property(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        if !name.is_empty() {
            self.properties.insert(name.to_string(), value.into());
        }
        self
    }
}
