//! Verdict caching with TTL and targeted invalidation.
//!
//! Uses Moka for lock-free concurrent access with TTL-based eviction, plus a
//! DashMap secondary index from user to cache keys so that editing one
//! user's assignments invalidates only that user's verdicts instead of
//! flushing everything.
//!
//! # Cache Safety
//!
//! Caching is **disabled** by default: a cached positive verdict can outlive
//! an assignment edit until its TTL expires. Enable it only when the
//! administrative write path calls [`DecisionCache::invalidate_user`] (or
//! [`DecisionCache::invalidate_all`] after bulk edits) and the TTL staleness
//! window is acceptable.

use std::collections::HashSet;
use std::time::Duration;

use dashmap::DashMap;
use moka::future::Cache;

use crate::model::{ApplicationName, GroupName, PrivilegeName, UserId};
use crate::resolver::{AccessContext, CheckRequest};

/// Configuration for the decision cache.
#[derive(Debug, Clone)]
pub struct DecisionCacheConfig {
    /// Whether caching is enabled. Defaults to `false`; cached positive
    /// verdicts can serve stale results after assignment edits.
    pub enabled: bool,
    /// Maximum number of entries in the cache.
    pub max_capacity: u64,
    /// Default TTL for cache entries.
    pub default_ttl: Duration,
}

impl Default for DecisionCacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_capacity: 100_000,
            default_ttl: Duration::from_secs(10),
        }
    }
}

impl DecisionCacheConfig {
    /// Enables or disables caching.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the maximum capacity.
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Sets the default TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }
}

/// Key that uniquely identifies one check verdict.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecisionKey {
    pub user: UserId,
    pub application: ApplicationName,
    pub group: GroupName,
    pub privilege: PrivilegeName,
    pub context: AccessContext,
}

impl DecisionKey {
    /// Builds the key for a check request.
    pub fn from_request(request: &CheckRequest) -> Self {
        Self {
            user: request.user.clone(),
            application: request.application.clone(),
            group: request.group.clone(),
            privilege: request.privilege.clone(),
            context: request.context.clone(),
        }
    }
}

/// TTL-bounded verdict cache.
///
/// Thread-safe; share it behind an `Arc` between the engine and whatever
/// write path performs invalidation.
pub struct DecisionCache {
    cache: Cache<DecisionKey, bool>,
    config: DecisionCacheConfig,
    /// Secondary index: user -> keys, for targeted invalidation.
    by_user: DashMap<UserId, HashSet<DecisionKey>>,
}

impl std::fmt::Debug for DecisionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionCache")
            .field("config", &self.config)
            .field("entry_count", &self.cache.entry_count())
            .field("user_index_size", &self.by_user.len())
            .finish()
    }
}

impl DecisionCache {
    /// Creates a new decision cache with the given configuration.
    pub fn new(config: DecisionCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(config.default_ttl)
            .build();

        Self {
            cache,
            config,
            by_user: DashMap::new(),
        }
    }

    /// Returns the configuration for this cache.
    pub fn config(&self) -> &DecisionCacheConfig {
        &self.config
    }

    /// Returns whether caching is enabled.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Inserts a verdict. The entry expires after the configured TTL.
    pub async fn insert(&self, key: DecisionKey, allowed: bool) {
        self.by_user
            .entry(key.user.clone())
            .or_default()
            .insert(key.clone());
        self.cache.insert(key, allowed).await;
    }

    /// Retrieves a cached verdict.
    ///
    /// Records hit/miss to `orgauth_decision_cache_hits_total` and
    /// `orgauth_decision_cache_misses_total`.
    pub async fn get(&self, key: &DecisionKey) -> Option<bool> {
        let result = self.cache.get(key).await;
        if result.is_some() {
            metrics::counter!("orgauth_decision_cache_hits_total").increment(1);
        } else {
            metrics::counter!("orgauth_decision_cache_misses_total").increment(1);
        }
        result
    }

    /// Invalidates every verdict cached for one user. Called by the write
    /// path after editing that user's assignments.
    ///
    /// Uses the secondary index: O(K) in the user's keys, not O(N) in all
    /// entries.
    pub async fn invalidate_user(&self, user: &UserId) {
        // Atomic remove() so no concurrent insert lands between read and removal.
        if let Some((_, keys)) = self.by_user.remove(user) {
            for key in &keys {
                self.cache.invalidate(key).await;
            }
        }
    }

    /// Drops every cached verdict. For bulk edits of roles, units, or
    /// catalogs, whose blast radius crosses users.
    pub fn invalidate_all(&self) {
        self.by_user.clear();
        self.cache.invalidate_all();
    }

    /// Returns the approximate number of entries in the cache.
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs pending maintenance tasks. Useful for testing TTL behavior.
    pub async fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks().await;
    }
}

/// Registers decision cache metric descriptions.
///
/// Optional; call once during startup for better documentation in whatever
/// scrapes the metrics recorder.
pub fn register_decision_cache_metrics() {
    metrics::describe_counter!(
        "orgauth_decision_cache_hits_total",
        "Total number of decision cache hits"
    );
    metrics::describe_counter!(
        "orgauth_decision_cache_misses_total",
        "Total number of decision cache misses"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_config() -> DecisionCacheConfig {
        DecisionCacheConfig::default().with_enabled(true)
    }

    fn key(user: &str, privilege: &str) -> DecisionKey {
        DecisionKey {
            user: UserId::from(user),
            application: ApplicationName::from("docs"),
            group: GroupName::from("documents"),
            privilege: PrivilegeName::from(privilege),
            context: AccessContext::None,
        }
    }

    #[test]
    fn test_cache_disabled_by_default() {
        assert!(!DecisionCacheConfig::default().enabled);
    }

    #[tokio::test]
    async fn test_insert_and_get_roundtrip() {
        let cache = DecisionCache::new(enabled_config());
        let key = key("alice", "read");

        cache.insert(key.clone(), true).await;

        assert_eq!(cache.get(&key).await, Some(true));
    }

    #[tokio::test]
    async fn test_miss_returns_none() {
        let cache = DecisionCache::new(enabled_config());
        assert_eq!(cache.get(&key("alice", "read")).await, None);
    }

    #[tokio::test]
    async fn test_context_is_part_of_the_key() {
        let cache = DecisionCache::new(enabled_config());
        let global = key("alice", "read");
        let mut scoped = key("alice", "read");
        scoped.context = AccessContext::Unit(crate::model::UnitId::from("branch-1"));

        cache.insert(global.clone(), true).await;
        cache.insert(scoped.clone(), false).await;

        assert_eq!(cache.get(&global).await, Some(true));
        assert_eq!(cache.get(&scoped).await, Some(false));
    }

    #[tokio::test]
    async fn test_invalidate_user_leaves_other_users_alone() {
        let cache = DecisionCache::new(enabled_config());
        let alice = key("alice", "read");
        let bob = key("bob", "read");
        cache.insert(alice.clone(), true).await;
        cache.insert(bob.clone(), true).await;

        cache.invalidate_user(&UserId::from("alice")).await;

        assert_eq!(cache.get(&alice).await, None);
        assert_eq!(cache.get(&bob).await, Some(true));
    }

    #[tokio::test]
    async fn test_invalidate_all_flushes_everything() {
        let cache = DecisionCache::new(enabled_config());
        let alice = key("alice", "read");
        let bob = key("bob", "edit");
        cache.insert(alice.clone(), true).await;
        cache.insert(bob.clone(), false).await;

        cache.invalidate_all();
        cache.run_pending_tasks().await;

        assert_eq!(cache.get(&alice).await, None);
        assert_eq!(cache.get(&bob).await, None);
    }

    #[tokio::test]
    async fn test_entry_expires_after_ttl() {
        let cache = DecisionCache::new(DecisionCacheConfig {
            enabled: true,
            max_capacity: 100,
            default_ttl: Duration::from_millis(50),
        });
        let key = key("alice", "read");
        cache.insert(key.clone(), true).await;
        assert_eq!(cache.get(&key).await, Some(true));

        tokio::time::sleep(Duration::from_millis(100)).await;
        cache.run_pending_tasks().await;

        assert_eq!(cache.get(&key).await, None);
    }
}
