//! Internal traversal context for the resolution engine.

use std::collections::HashSet;
use std::sync::Arc;

use crate::model::{ApplicationName, RoleId};

/// Context carried through application-role delegation chains.
///
/// Delegation is the one recursive path in the engine (an application role
/// may itself delegate further), so it tracks both depth and the set of
/// (application, role) pairs already expanded. Mutually delegating roles are
/// cut off by the visited set, not reported as errors.
#[derive(Debug, Clone)]
pub(crate) struct DelegationContext {
    pub(crate) depth: u32,
    /// Already-expanded delegation targets.
    /// Wrapped in Arc for cheap cloning when not mutating.
    pub(crate) visited: Arc<HashSet<(ApplicationName, RoleId)>>,
}

impl DelegationContext {
    pub(crate) fn new() -> Self {
        Self {
            depth: 0,
            visited: Arc::new(HashSet::new()),
        }
    }

    pub(crate) fn contains(&self, application: &ApplicationName, role: &RoleId) -> bool {
        self.visited
            .contains(&(application.clone(), role.clone()))
    }

    pub(crate) fn descend(&self, application: &ApplicationName, role: &RoleId) -> Self {
        // Clone the inner set only when adding entries (copy-on-write)
        let mut visited = (*self.visited).clone();
        visited.insert((application.clone(), role.clone()));
        Self {
            depth: self.depth + 1,
            visited: Arc::new(visited),
        }
    }
}
