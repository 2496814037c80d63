//! Configuration for the resolution engine.

use std::sync::Arc;

use crate::cache::DecisionCache;

/// Configuration for the resolution engine.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Maximum depth for application-role delegation chains. Closure and
    /// subtree walks are iterative and need no cap; this bounds only the
    /// recursion introduced when application roles delegate to each other.
    pub max_delegation_depth: u32,
    /// Optional verdict cache.
    ///
    /// When enabled, the engine consults the cache before resolving and
    /// stores verdicts afterwards. Whoever edits assignments is responsible
    /// for invalidating affected users.
    pub cache: Option<Arc<DecisionCache>>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_delegation_depth: 16,
            cache: None,
        }
    }
}

impl ResolverConfig {
    /// Creates a configuration with caching enabled.
    pub fn with_cache(mut self, cache: Arc<DecisionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Creates a configuration with the specified delegation depth limit.
    pub fn with_max_delegation_depth(mut self, max_delegation_depth: u32) -> Self {
        self.max_delegation_depth = max_delegation_depth;
        self
    }
}
