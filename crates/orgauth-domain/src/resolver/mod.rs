//! Resolution engine: role closures, organizational scoping, privilege
//! merging, and the allow/deny decision.

mod config;
mod context;
mod engine;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::ResolverConfig;
pub use engine::{AuthorizationEngine, CacheMetrics, CacheMetricsSnapshot};
pub use traits::{CatalogReader, DirectoryReader};
pub use types::{
    AccessContext, CheckRequest, CheckResult, EffectiveApplication, EffectiveGroup,
    EffectivePrivilege, EffectivePrivileges, MergeScope, MergedPrivileges, PrivilegeBucket,
};
