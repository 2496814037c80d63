//! Roles and their graph edges.
//!
//! Roles are connected by two relations, each stored in both directions:
//! generalization/specialization (an is-a hierarchy) and privilege
//! sending/receiving (one-way delegation without hierarchy). Administrators
//! can and do misconfigure these into cycles, so no consumer may assume a
//! DAG; the resolver walks edges with a visited set.

use serde::{Deserialize, Serialize};

use super::ids::{OrgFieldId, RoleId, UnitTypeId};

/// A named bundle of authorization intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub title: String,
    /// Optional classification dimension shared with organizational units.
    pub field: Option<OrgFieldId>,
    /// Unit types at which this role may be assigned to users. Enforced by
    /// the administrative layer.
    pub allowed_unit_types: Vec<UnitTypeId>,
    /// Roles this role generalizes from (its more general ancestors). The
    /// privilege closure follows these: a role inherits what its
    /// generalizations grant.
    pub generalization_roles: Vec<RoleId>,
    /// Inverse of `generalization_roles`: roles that specialize this one.
    /// The instance closure follows these: a more specific role counts as an
    /// instance of its generalization.
    pub specialization_roles: Vec<RoleId>,
    /// Roles that send their privileges to this role. Followed by the
    /// privilege closure only.
    pub privileges_sending_roles: Vec<RoleId>,
    /// Inverse of `privileges_sending_roles`; kept for the administrative
    /// layer, never followed during resolution.
    pub privileges_receiving_roles: Vec<RoleId>,
    /// The role exists only to be generalized into others and must never be
    /// assigned to a user directly.
    pub no_direct_memberships: bool,
    /// Assignments of this role must carry a caller-supplied privilege
    /// object id (resolved by delegated-custom privilege groups).
    pub delegated_custom_privilege_object_role: bool,
}

impl Role {
    pub fn new(id: impl Into<RoleId>) -> Self {
        let id = id.into();
        let title = id.to_string();
        Self {
            id,
            title,
            field: None,
            allowed_unit_types: Vec::new(),
            generalization_roles: Vec::new(),
            specialization_roles: Vec::new(),
            privileges_sending_roles: Vec::new(),
            privileges_receiving_roles: Vec::new(),
            no_direct_memberships: false,
            delegated_custom_privilege_object_role: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_field(mut self, field: impl Into<OrgFieldId>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_generalizations(mut self, roles: Vec<RoleId>) -> Self {
        self.generalization_roles = roles;
        self
    }

    pub fn with_specializations(mut self, roles: Vec<RoleId>) -> Self {
        self.specialization_roles = roles;
        self
    }

    pub fn with_sending_roles(mut self, roles: Vec<RoleId>) -> Self {
        self.privileges_sending_roles = roles;
        self
    }

    pub fn with_receiving_roles(mut self, roles: Vec<RoleId>) -> Self {
        self.privileges_receiving_roles = roles;
        self
    }

    pub fn no_direct_memberships(mut self) -> Self {
        self.no_direct_memberships = true;
        self
    }

    pub fn delegated_custom_object(mut self) -> Self {
        self.delegated_custom_privilege_object_role = true;
        self
    }
}
