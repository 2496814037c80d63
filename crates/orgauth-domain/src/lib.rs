//! orgauth-domain: role-graph and organization-scoped privilege resolution
//!
//! This crate answers one question: is privilege P (optionally on object O)
//! allowed for user U in context C? It resolves the user's role assignments
//! through the role graph's privilege closure, applies organizational-unit
//! scoping and privilege-group kind semantics, and merges everything into a
//! single allow/deny verdict or a display-oriented effective-privileges view.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 orgauth-domain                   │
//! ├─────────────────────────────────────────────────┤
//! │  model/     - Units, roles, catalogs, grants    │
//! │  resolver/  - Closures, scoping, merge, verdict │
//! │  cache/     - Optional decision caching         │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! The engine owns no storage: it reads a consistent snapshot through the
//! [`resolver::DirectoryReader`] and [`resolver::CatalogReader`] traits for
//! the duration of one request and never mutates anything.

pub mod cache;
pub mod error;
pub mod model;
pub mod resolver;

// Re-export commonly used types at the crate root
pub use cache::{DecisionCache, DecisionCacheConfig, DecisionKey};
pub use error::{DomainError, DomainResult};
pub use resolver::{AccessContext, AuthorizationEngine, CheckRequest, CheckResult, ResolverConfig};
