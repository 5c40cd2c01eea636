//! Transport-agnostic request context.
//!
//! A future HTTP/JSON-RPC layer constructs one of these per inbound tool call
//! from whatever `namespace` query parameter (or equivalent) it was given; the
//! core never looks beyond this struct to figure out which namespace a call
//! belongs to.

use crate::namespace::DEFAULT_NAMESPACE;

/// Carries the namespace tag for one inbound tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub namespace: String,
}

impl RequestContext {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolves_to_default_namespace() {
        assert_eq!(RequestContext::default().namespace, "default");
    }

    #[test]
    fn new_uses_the_given_namespace() {
        assert_eq!(RequestContext::new("teamA").namespace, "teamA");
    }
}
