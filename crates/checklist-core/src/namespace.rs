//! The process-wide namespace registry.
//!
//! A namespace owns one [`SessionStore`] and one [`WorkInfoStore`]. The
//! registry itself is a bounded LRU of namespaces with one exception: the
//! `"default"` namespace is pinned — it is created eagerly, never evicted, and
//! excluded from the eviction candidate list entirely. Namespace lookup and
//! creation is serialized behind one mutex, but that mutex is released before
//! a caller ever touches a namespace's stores — each store carries its own
//! lock, so work against different namespaces (or different stores within the
//! same namespace) never contends on a single process-wide lock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::config::CoreConfig;
use crate::session_store::SessionStore;
use crate::workinfo_store::WorkInfoStore;

/// The namespace every request uses when the transport supplies none.
pub const DEFAULT_NAMESPACE: &str = "default";

/// One tenant bucket: a session store and a work-info store, both privately
/// mutex-guarded so handlers can hold a namespace's lock across one
/// read-modify-write without blocking other namespaces.
pub struct Namespace {
    pub sessions: Mutex<SessionStore>,
    pub work_infos: Mutex<WorkInfoStore>,
}

impl Namespace {
    fn new(config: CoreConfig) -> Self {
        Self {
            sessions: Mutex::new(SessionStore::new(config.max_sessions)),
            work_infos: Mutex::new(WorkInfoStore::new(crate::config::WORK_INFO_CAPACITY)),
        }
    }
}

/// Bounded, lazily-populated registry of [`Namespace`]s, keyed by name.
///
/// `"default"` is pinned: present from construction, never appears in the
/// eviction-candidate list, and is never removed regardless of how many other
/// namespaces are addressed.
pub struct NamespaceRegistry {
    config: CoreConfig,
    state: Mutex<RegistryState>,
}

struct RegistryState {
    namespaces: HashMap<String, Arc<Namespace>>,
    /// Least- to most-recently-touched non-default namespace names.
    eviction_order: Vec<String>,
}

impl NamespaceRegistry {
    /// Build a registry with `"default"` already present and pinned.
    pub fn new(config: CoreConfig) -> Self {
        let mut namespaces = HashMap::new();
        namespaces.insert(
            DEFAULT_NAMESPACE.to_string(),
            Arc::new(Namespace::new(config)),
        );
        Self {
            config,
            state: Mutex::new(RegistryState {
                namespaces,
                eviction_order: Vec::new(),
            }),
        }
    }

    /// Run `f` against the namespace named `name`, creating it on demand
    /// (evicting the least-recently-touched non-default namespace if the
    /// registry is at capacity).
    ///
    /// The registry-wide lock covers only the lookup/creation/eviction above;
    /// it is released before `f` runs, so a long-running handler body never
    /// blocks lookups for unrelated namespaces.
    pub fn with_namespace<R>(&self, name: &str, f: impl FnOnce(&Namespace) -> R) -> R {
        let namespace = {
            let mut state = self.state.lock().unwrap_or_else(|poison| poison.into_inner());

            if name != DEFAULT_NAMESPACE {
                if !state.namespaces.contains_key(name) {
                    Self::ensure_capacity(&mut state, self.config);
                    state
                        .namespaces
                        .insert(name.to_string(), Arc::new(Namespace::new(self.config)));
                    info!(event = "core.namespace.created", namespace = name);
                }
                state.eviction_order.retain(|n| n != name);
                state.eviction_order.push(name.to_string());
            }

            // `name` is guaranteed present: either it's "default" (inserted in
            // `new`) or it was just created/touched above.
            Arc::clone(state.namespaces.get(name).expect("namespace present"))
        };

        f(&namespace)
    }

    fn ensure_capacity(state: &mut RegistryState, config: CoreConfig) {
        // "default" is never counted toward eviction candidates, so capacity
        // is compared against the non-default population only.
        while state.eviction_order.len() >= config.max_namespaces {
            let victim = state.eviction_order.remove(0);
            state.namespaces.remove(&victim);
            debug!(event = "core.namespace.evicted", namespace = %victim);
        }
    }

    /// Number of namespaces currently held, including the pinned default.
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .namespaces
            .len()
    }
}
