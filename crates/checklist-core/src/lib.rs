//! In-memory engine backing a checklist tool-call surface: namespaced,
//! per-session task forests plus a namespaced work-info snapshot store.
//!
//! This crate has no transport of its own. A JSON-RPC/HTTP layer constructs
//! one [`ChecklistEngine`], builds a [`RequestContext`] per inbound call from
//! whatever namespace tag the transport carries, and calls the matching
//! method — each one mirrors a tool-call handler in `handlers` and returns
//! the ordered text parts the transport contract expects.

pub mod config;
pub mod context;
pub mod errors;
pub mod handlers;
pub mod lru;
pub mod namespace;
pub mod session_store;
pub mod tree;
pub mod work_info;
pub mod workid;
mod validators;

pub use config::CoreConfig;
pub use context::RequestContext;
pub use errors::CoreError;
pub use namespace::NamespaceRegistry;
pub use tree::{Task, TaskStatus};
pub use work_info::{WorkInfo, WorkSummary};
pub use workid::WorkIdGenerator;

/// Owns the two process-wide stores the six tool handlers operate against:
/// the namespace registry and the workId generator.
///
/// Construction reads capacities from the environment once
/// ([`CoreConfig::from_env`]); nothing here re-reads the environment later.
pub struct ChecklistEngine {
    registry: NamespaceRegistry,
    work_ids: WorkIdGenerator,
}

impl ChecklistEngine {
    pub fn new(config: CoreConfig) -> Self {
        Self {
            registry: NamespaceRegistry::new(config),
            work_ids: WorkIdGenerator::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(CoreConfig::from_env())
    }

    pub fn update_tasks(
        &self,
        ctx: &RequestContext,
        session_id: &str,
        path: &str,
        tasks: Vec<Task>,
    ) -> Vec<String> {
        handlers::respond(handlers::update_tasks(
            &self.registry,
            ctx,
            session_id,
            path,
            tasks,
        ))
    }

    pub fn mark_task_as_done(
        &self,
        ctx: &RequestContext,
        session_id: &str,
        task_id: &str,
    ) -> Vec<String> {
        handlers::respond(handlers::mark_task_as_done(
            &self.registry,
            ctx,
            session_id,
            task_id,
        ))
    }

    pub fn get_all_tasks(&self, ctx: &RequestContext, session_id: &str) -> Vec<String> {
        handlers::respond(handlers::get_all_tasks(&self.registry, ctx, session_id))
    }

    pub fn save_current_work_info(
        &self,
        ctx: &RequestContext,
        work_summarize: &str,
        work_description: &str,
        session_id: Option<&str>,
    ) -> Vec<String> {
        handlers::respond(handlers::save_current_work_info(
            &self.registry,
            &self.work_ids,
            ctx,
            work_summarize,
            work_description,
            session_id,
        ))
    }

    pub fn get_recent_works_info(&self, ctx: &RequestContext) -> Vec<String> {
        handlers::respond(handlers::get_recent_works_info(&self.registry, ctx))
    }

    pub fn get_work_by_id(&self, ctx: &RequestContext, work_id: &str) -> Vec<String> {
        handlers::respond(handlers::get_work_by_id(&self.registry, ctx, work_id))
    }
}
