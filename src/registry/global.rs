//! Process-wide format registry
//!
//! Components that are handed an `Arc<FormatRegistry>` should keep using it.
//! This instance exists for callers with no registry to inject, so that they
//! all share one store.

use std::sync::{Arc, OnceLock};

use super::store::FormatRegistry;

static GLOBAL_REGISTRY: OnceLock<Arc<FormatRegistry>> = OnceLock::new();

impl FormatRegistry {
    /// Get the process-wide registry
    ///
    /// Created with default configuration on first call. Racing first callers
    /// all observe the same instance.
    pub fn instance() -> Arc<FormatRegistry> {
        Arc::clone(GLOBAL_REGISTRY.get_or_init(|| Arc::new(FormatRegistry::new())))
    }
}
