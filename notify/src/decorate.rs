//! Selector-header decoration
//!
//! [`SelectorHeaderFactory`] wraps an inner [`MessageFactory`] and augments
//! its output: every property whose name contains a period gets a second
//! copy under the identifier-safe name computed by
//! [`IdentifierRules::transform`]. Receivers that know the algorithm can use
//! the transformed name in a selector expression.
//!
//! ```text
//! Event ──► inner factory ──► decoration pass ──► transport
//!           org.fcrepo.jms.eventType = "…"
//!                                 └──► orgFcrepoJmsEventType = "…" (added)
//! ```
//!
//! # Failure policy
//!
//! A failure on one property (non-string value, empty transformed name) is
//! logged and counted; the pass always continues with the remaining
//! properties and the message is returned partially decorated. Only a failure
//! of the inner factory itself is fatal.

use leima_core::{FactoryError, Message, MessageFactory, NotificationEvent, PropertyError, Session};
use tracing::{debug, error};

use crate::selector::IdentifierRules;

/// Property names containing this character are eligible for decoration
const ELIGIBILITY_MARKER: char = '.';

/// Outcome counts of one decoration pass
///
/// Distinguishes properties skipped as ineligible from properties that
/// failed while being copied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecorationReport {
    /// Selector-header copies added to the message
    pub added: usize,
    /// Properties left untouched because their name has no period
    pub skipped: usize,
    /// Eligible properties that failed to copy (logged, not fatal)
    pub failed: usize,
}

/// Message factory that adds selector-safe header copies
///
/// Wraps the inner factory by composition; the inner factory builds the base
/// message and this one decorates it in place.
///
/// # Example
///
/// ```ignore
/// use leima_notify::{DefaultMessageFactory, SelectorHeaderFactory};
///
/// let factory = SelectorHeaderFactory::new(DefaultMessageFactory::new());
/// let message = factory.message(&event, &session)?;
/// // message now carries e.g. both "org.fcrepo.jms.eventType"
/// // and "orgFcrepoJmsEventType"
/// ```
pub struct SelectorHeaderFactory<F> {
    inner: F,
    rules: IdentifierRules,
}

impl<F> SelectorHeaderFactory<F> {
    /// Wrap `inner` using the default ASCII identifier rules
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            rules: IdentifierRules::default(),
        }
    }

    /// Wrap `inner` using custom identifier rules
    pub fn with_rules(inner: F, rules: IdentifierRules) -> Self {
        Self { inner, rules }
    }

    /// Run one decoration pass over `message`
    ///
    /// Snapshots the property names present at entry, then for each name
    /// containing a period reads the string value, transforms the name, and
    /// writes the copy back onto the same message. Properties added by the
    /// pass are never revisited; nothing is removed. Per-property failures
    /// are logged and counted in the report.
    pub fn decorate(&self, message: &mut Message) -> DecorationReport {
        let mut report = DecorationReport::default();

        let names: Vec<String> = message.property_names().map(str::to_owned).collect();
        for name in names {
            if !name.contains(ELIGIBILITY_MARKER) {
                report.skipped += 1;
                continue;
            }

            match self.copy_property(message, &name) {
                Ok(selector) => {
                    debug!(property = %name, selector = %selector, "added selector header");
                    report.added += 1;
                }
                Err(err) => {
                    error!(property = %name, error = %err, "failed to add selector header");
                    report.failed += 1;
                }
            }
        }

        report
    }

    fn copy_property(&self, message: &mut Message, name: &str) -> Result<String, PropertyError> {
        let value = message.string_property(name)?.to_owned();
        let selector = self.rules.transform(name);
        message.set_string_property(selector.clone(), value)?;
        Ok(selector)
    }
}

impl<F: MessageFactory> MessageFactory for SelectorHeaderFactory<F> {
    fn name(&self) -> &'static str {
        "selector-headers"
    }

    fn message(
        &self,
        event: &NotificationEvent,
        session: &dyn Session,
    ) -> Result<Message, FactoryError> {
        debug!(factory = self.inner.name(), path = %event.path(), "generating message for resource");
        let mut message = self.inner.message(event, session)?;
        self.decorate(&mut message);
        Ok(message)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use bytes::Bytes;

    struct PassThroughFactory;

    impl MessageFactory for PassThroughFactory {
        fn name(&self) -> &'static str {
            "passthrough"
        }

        fn message(
            &self,
            _event: &NotificationEvent,
            session: &dyn Session,
        ) -> Result<Message, FactoryError> {
            session.create_message()
        }
    }

    fn decorator() -> SelectorHeaderFactory<PassThroughFactory> {
        SelectorHeaderFactory::new(PassThroughFactory)
    }

    #[test]
    fn test_eligible_property_copied() {
        let mut msg = Message::new(Bytes::new())
            .with_property("org.fcrepo.jms.eventType", "create");

        let report = decorator().decorate(&mut msg);

        assert_eq!(report, DecorationReport { added: 1, skipped: 0, failed: 0 });
        assert_eq!(msg.property_count(), 2);
        assert_eq!(msg.string_property("org.fcrepo.jms.eventType").unwrap(), "create");
        assert_eq!(msg.string_property("orgFcrepoJmsEventType").unwrap(), "create");
    }

    #[test]
    fn test_undotted_property_skipped() {
        let mut msg = Message::new(Bytes::new()).with_property("JMSCorrelationID", "abc");

        let report = decorator().decorate(&mut msg);

        assert_eq!(report, DecorationReport { added: 0, skipped: 1, failed: 0 });
        assert_eq!(msg.property_count(), 1);
    }

    #[test]
    fn test_one_eligible_one_ineligible_gives_three_properties() {
        let mut msg = Message::new(Bytes::new())
            .with_property("org.fcrepo.jms.identifier", "/objects/1")
            .with_property("JMSCorrelationID", "abc");

        let report = decorator().decorate(&mut msg);

        assert_eq!(report, DecorationReport { added: 1, skipped: 1, failed: 0 });
        assert_eq!(msg.property_count(), 3);
        assert_eq!(msg.string_property("orgFcrepoJmsIdentifier").unwrap(), "/objects/1");
    }

    #[test]
    fn test_non_string_dotted_property_fails_without_aborting() {
        let mut msg = Message::new(Bytes::new())
            .with_property("org.example.count", 5_i64)
            .with_property("org.example.kind", "widget");

        let report = decorator().decorate(&mut msg);

        assert_eq!(report, DecorationReport { added: 1, skipped: 0, failed: 1 });
        assert!(!msg.has_property("orgExampleCount"));
        assert_eq!(msg.string_property("orgExampleKind").unwrap(), "widget");
    }

    #[test]
    fn test_all_illegal_name_counts_as_failed() {
        // "...." transforms to the empty string, which the message rejects
        let mut msg = Message::new(Bytes::new()).with_property("....", "value");

        let report = decorator().decorate(&mut msg);

        assert_eq!(report, DecorationReport { added: 0, skipped: 0, failed: 1 });
        assert_eq!(msg.property_count(), 1);
    }

    #[test]
    fn test_added_properties_not_revisited() {
        // The transformed copy of "a.b" is "aB"; a second-generation copy of
        // "aB" would be "aB" again, but the pass must not even consider it.
        let mut msg = Message::new(Bytes::new()).with_property("a.b", "v");

        let report = decorator().decorate(&mut msg);

        assert_eq!(report.added, 1);
        assert_eq!(msg.property_count(), 2);
    }

    #[test]
    fn test_collision_is_last_write_wins() {
        // A pre-existing property under the transformed name is overwritten
        let mut msg = Message::new(Bytes::new())
            .with_property("orgExampleKind", "old")
            .with_property("org.example.kind", "new");

        let report = decorator().decorate(&mut msg);

        assert_eq!(report, DecorationReport { added: 1, skipped: 1, failed: 0 });
        assert_eq!(msg.property_count(), 2);
        assert_eq!(msg.string_property("orgExampleKind").unwrap(), "new");
    }

    #[test]
    fn test_enumeration_order_preserved() {
        let mut msg = Message::new(Bytes::new())
            .with_property("z.z", "1")
            .with_property("plain", "2")
            .with_property("a.a", "3");

        decorator().decorate(&mut msg);

        let names: Vec<&str> = msg.property_names().collect();
        assert_eq!(names, vec!["z.z", "plain", "a.a", "zZ", "aA"]);
    }
}
