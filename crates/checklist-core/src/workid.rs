//! Work-ID generator.
//!
//! Maintains a process-wide set of already-issued IDs so concurrent
//! `save_current_work_info` calls across every namespace never collide.
//! Uniqueness is in-process only — nothing here is persisted, and the used-ID
//! set is never pruned on eviction: an evicted workId is gone from the store
//! but the generator still refuses to reissue it.

use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::sync::Mutex;

use rand::Rng;
use tracing::{debug, warn};

use crate::errors::CoreError;

const WORK_ID_MIN: u32 = 10_000_000;
const WORK_ID_MAX: u32 = 99_999_999;
const MAX_ATTEMPTS: usize = 1000;

/// Allocates unique 8-digit decimal workIds for the lifetime of the process.
pub struct WorkIdGenerator {
    issued: Mutex<HashSet<u32>>,
}

impl WorkIdGenerator {
    pub fn new() -> Self {
        Self {
            issued: Mutex::new(HashSet::new()),
        }
    }

    /// Draw a uniform random integer in `[10_000_000, 99_999_999]`, retrying
    /// on collision with a previously issued id. Gives up after
    /// [`MAX_ATTEMPTS`] attempts with [`CoreError::IdExhaustion`].
    pub fn generate(&self) -> Result<String, CoreError> {
        let mut issued = self
            .issued
            .lock()
            .unwrap_or_else(|poison| poison.into_inner());
        let candidate = draw_unique(&mut issued, WORK_ID_MIN..=WORK_ID_MAX, MAX_ATTEMPTS)?;
        Ok(format!("{candidate:08}"))
    }
}

impl Default for WorkIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw a uniform random value from `range` not already in `issued`, retrying
/// up to `max_attempts` times and inserting the winner before returning it.
/// Factored out of [`WorkIdGenerator::generate`] so the exhaustion path can be
/// exercised against a small range in tests instead of the full 90-million-id
/// keyspace.
fn draw_unique(
    issued: &mut HashSet<u32>,
    range: RangeInclusive<u32>,
    max_attempts: usize,
) -> Result<u32, CoreError> {
    let mut rng = rand::thread_rng();
    for attempt in 0..max_attempts {
        let candidate = rng.gen_range(range.clone());
        if issued.insert(candidate) {
            return Ok(candidate);
        }
        debug!(event = "core.work_id.collision_retry", attempt);
    }

    warn!(
        event = "core.work_id.exhausted",
        attempts = max_attempts,
        issued_count = issued.len(),
    );
    Err(CoreError::IdExhaustion)
}
