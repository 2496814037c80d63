//! orgauth-store: snapshot store backing the resolution engine
//!
//! This crate provides the data backing for orgauth:
//! - In-memory implementation of the engine's reader traits
//! - An administrative write surface for loading applications and editing
//!   the directory
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               orgauth-store                 │
//! ├─────────────────────────────────────────────┤
//! │  memory.rs - DashMap-backed snapshot store  │
//! │  error.rs  - write-surface error types      │
//! └─────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use memory::{ApplicationBundle, MemoryStore};
