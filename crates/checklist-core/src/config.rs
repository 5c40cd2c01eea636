//! Env-driven capacity configuration, read once at registry construction.

use tracing::warn;

/// Default session-store capacity per namespace, used when `MAX_SESSIONS` is
/// absent or fails to parse as a positive integer.
pub const DEFAULT_MAX_SESSIONS: usize = 100;

/// Default namespace-registry capacity, used when `MAX_NAMESPACES` is absent or
/// fails to parse as a positive integer.
pub const DEFAULT_MAX_NAMESPACES: usize = 32;

/// Fixed work-info-store capacity per namespace. Not environment-configurable.
pub const WORK_INFO_CAPACITY: usize = 10;

/// Capacities governing one [`crate::namespace::NamespaceRegistry`].
///
/// Constructed once from the environment and held immutably for the lifetime of
/// the registry it configures — re-reading the environment later has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreConfig {
    pub max_sessions: usize,
    pub max_namespaces: usize,
}

impl CoreConfig {
    /// Read `MAX_SESSIONS` and `MAX_NAMESPACES` from the environment, falling
    /// back to defaults on absence or parse failure. Never panics.
    pub fn from_env() -> Self {
        Self {
            max_sessions: positive_usize_env("MAX_SESSIONS", DEFAULT_MAX_SESSIONS),
            max_namespaces: positive_usize_env("MAX_NAMESPACES", DEFAULT_MAX_NAMESPACES),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            max_sessions: DEFAULT_MAX_SESSIONS,
            max_namespaces: DEFAULT_MAX_NAMESPACES,
        }
    }
}

fn positive_usize_env(key: &str, default: usize) -> usize {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse::<usize>() {
            Ok(value) if value > 0 => value,
            Ok(_) | Err(_) => {
                warn!(
                    event = "core.config.invalid_env_value",
                    key,
                    raw,
                    "expected a positive integer, falling back to default"
                );
                default
            }
        },
        Err(_) => default,
    }
}
