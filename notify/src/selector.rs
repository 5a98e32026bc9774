//! Selector-safe name transformation
//!
//! Broker selector expressions can only reference properties whose names are
//! valid identifiers. Dotted, namespaced names (`org.example.event.type`)
//! are not. [`IdentifierRules::transform`] maps an arbitrary name to an
//! identifier-safe one deterministically, camel-casing at the points where
//! characters were dropped so the result stays readable and unlikely to
//! collide:
//!
//! ```text
//! org.fcrepo.jms.eventType ──► orgFcrepoJmsEventType
//! ```
//!
//! Receivers that know the algorithm can compute the transformed name of any
//! header and use it in a selector.

/// Injectable identifier character classes
///
/// Which characters may start or continue an identifier is a property of the
/// selector grammar, not of this crate, so the two predicates are injectable.
/// The default is the common ASCII rule: letters, underscore, and dollar sign
/// start an identifier; digits may additionally continue one.
#[derive(Clone, Copy)]
pub struct IdentifierRules {
    is_start: fn(char) -> bool,
    is_part: fn(char) -> bool,
}

fn ascii_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn ascii_identifier_part(c: char) -> bool {
    ascii_identifier_start(c) || c.is_ascii_digit()
}

impl Default for IdentifierRules {
    fn default() -> Self {
        Self {
            is_start: ascii_identifier_start,
            is_part: ascii_identifier_part,
        }
    }
}

impl IdentifierRules {
    /// Create rules from custom start/part predicates
    pub fn new(is_start: fn(char) -> bool, is_part: fn(char) -> bool) -> Self {
        Self { is_start, is_part }
    }

    /// Transform `input` into an identifier-safe name
    ///
    /// Single left-to-right pass over the characters:
    ///
    /// 1. Until a valid start character is found, every character that is not
    ///    one is dropped. The first start character is emitted as-is.
    /// 2. After the start, a valid part character is emitted unchanged, or
    ///    uppercased when the previous character was dropped. An invalid
    ///    character is dropped and marks the next valid one for uppercasing.
    ///
    /// A name that is already a valid identifier comes back unchanged; a name
    /// with no valid start character at all comes back empty. Consecutive
    /// dropped characters collapse into a single uppercasing, and trailing
    /// dropped characters have no effect. The output is never longer than the
    /// input, and transforming twice gives the same result as transforming
    /// once.
    pub fn transform(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut seen_start = false;
        let mut pending_upper = false;

        for c in input.chars() {
            if !seen_start {
                if (self.is_start)(c) {
                    seen_start = true;
                    out.push(c);
                }
                continue;
            }

            if (self.is_part)(c) {
                if pending_upper {
                    out.extend(c.to_uppercase());
                    pending_upper = false;
                } else {
                    out.push(c);
                }
            } else {
                pending_upper = true;
            }
        }

        out
    }

    /// Whether `name` is already a valid identifier under these rules
    pub fn is_identifier(&self, name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => (self.is_start)(first) && chars.all(|c| (self.is_part)(c)),
            None => false,
        }
    }
}

/// Transform `input` with the default ASCII identifier rules
///
/// See [`IdentifierRules::transform`].
pub fn transform(input: &str) -> String {
    IdentifierRules::default().transform(input)
}
