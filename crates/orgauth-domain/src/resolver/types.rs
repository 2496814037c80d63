//! Types for the resolution engine.

use std::collections::{HashMap, HashSet};

use crate::model::{
    ApplicationName, GroupKind, GroupName, ObjectId, PrivilegeName, UnitId, UserId,
};

/// Context a privilege is checked in.
///
/// Which variant applies is decided by the privilege group's kind: global
/// kinds ignore the context, unit-scoped kinds require [`AccessContext::Unit`]
/// and object-scoped kinds require [`AccessContext::Object`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccessContext {
    /// No context; sufficient for globally scoped groups only.
    None,
    /// The organizational unit the action targets.
    Unit(UnitId),
    /// The application-defined object the action targets.
    Object(ObjectId),
}

/// Request for a privilege check.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// The user performing the action.
    pub user: UserId,
    /// The application owning the privilege group.
    pub application: ApplicationName,
    /// The privilege group being checked.
    pub group: GroupName,
    /// The privilege within the group.
    pub privilege: PrivilegeName,
    /// The organizational or object context of the action.
    pub context: AccessContext,
}

impl CheckRequest {
    /// Creates a context-free check request.
    pub fn new(
        user: impl Into<UserId>,
        application: impl Into<ApplicationName>,
        group: impl Into<GroupName>,
        privilege: impl Into<PrivilegeName>,
    ) -> Self {
        Self {
            user: user.into(),
            application: application.into(),
            group: group.into(),
            privilege: privilege.into(),
            context: AccessContext::None,
        }
    }

    /// Sets an organizational-unit context.
    pub fn at_unit(mut self, unit: impl Into<UnitId>) -> Self {
        self.context = AccessContext::Unit(unit.into());
        self
    }

    /// Sets a privilege-object context.
    pub fn on_object(mut self, object: impl Into<ObjectId>) -> Self {
        self.context = AccessContext::Object(object.into());
        self
    }
}

/// Result of a privilege check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Whether the check is allowed.
    pub allowed: bool,
}

/// Scope a merge runs under, taken from one user-role assignment.
///
/// The assignment's unit is the default subtree root for unit-scoped grants
/// that carry no fixed root of their own; the delegated object feeds
/// delegated-custom groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeScope {
    pub unit: Option<UnitId>,
    pub delegated_object: Option<ObjectId>,
}

impl MergeScope {
    /// Scope for display-oriented merges that run without a user
    /// assignment; unit-scoped grants resolve only their fixed roots.
    pub fn unassigned() -> Self {
        Self::default()
    }
}

/// Everything granted to one (application, privilege group) pair after
/// merging a role's privilege closure.
#[derive(Debug, Clone, Default)]
pub struct PrivilegeBucket {
    /// Granted privilege names, unioned across all contributing grants.
    pub privileges: HashSet<PrivilegeName>,
    /// Resolved organizational scope, for unit-scoped group kinds.
    pub scope_units: HashSet<UnitId>,
    /// Granted privilege objects, for object-scoped group kinds.
    pub privilege_objects: HashSet<ObjectId>,
    /// Set if any contributing grant allows object-parent-chain matching.
    pub object_inheritance: bool,
    /// Objects supplied by user-role assignments, for delegated-custom
    /// group kinds.
    pub delegated_objects: HashSet<ObjectId>,
}

/// Merged privileges of one role under one scope, keyed by application and
/// group. This structure feeds the decision directly; the display view is
/// derived from it.
#[derive(Debug, Clone, Default)]
pub struct MergedPrivileges {
    pub buckets: HashMap<(ApplicationName, GroupName), PrivilegeBucket>,
}

impl MergedPrivileges {
    pub fn bucket(
        &self,
        application: &ApplicationName,
        group: &GroupName,
    ) -> Option<&PrivilegeBucket> {
        self.buckets
            .get(&(application.clone(), group.clone()))
    }

    pub(crate) fn bucket_mut(
        &mut self,
        application: &ApplicationName,
        group: &GroupName,
    ) -> &mut PrivilegeBucket {
        self.buckets
            .entry((application.clone(), group.clone()))
            .or_default()
    }
}

/// Display view of one privilege within a merged group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectivePrivilege {
    pub name: PrivilegeName,
    pub title: String,
}

/// Display view of one merged privilege group.
#[derive(Debug, Clone)]
pub struct EffectiveGroup {
    pub name: GroupName,
    pub title: String,
    pub kind: GroupKind,
    /// Title-sorted.
    pub privileges: Vec<EffectivePrivilege>,
    pub scope_units: Vec<UnitId>,
    pub privilege_objects: Vec<ObjectId>,
}

/// Display view of one application's merged groups.
#[derive(Debug, Clone)]
pub struct EffectiveApplication {
    pub name: ApplicationName,
    pub title: String,
    /// Title-sorted.
    pub groups: Vec<EffectiveGroup>,
}

/// Title-sorted effective privileges of a role, grouped per application.
///
/// Titles and ordering exist for the benefit of the UI layer; the allow/deny
/// decision never reads this structure.
#[derive(Debug, Clone, Default)]
pub struct EffectivePrivileges {
    pub applications: Vec<EffectiveApplication>,
}
