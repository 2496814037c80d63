//! Assignments connecting roles to privileges and users to roles.
//!
//! Three kinds:
//! - role -> external application role (delegates everything that role grants),
//! - role -> privilege group (direct grant of selected privileges/objects),
//! - user -> role at an organizational unit (the only edge from a concrete
//!   user into the role graph).

use serde::{Deserialize, Serialize};

use super::ids::{
    ApplicationName, GroupName, ObjectId, OrgFieldId, PrivilegeName, RoleId, UnitId, UnitTypeId,
    UserId,
};

/// Grants a role everything the named external application role would grant,
/// as if the assigning role held it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleApplicationRoleAssignment {
    pub role: RoleId,
    pub application: ApplicationName,
    /// Name of the external application role, resolved against the
    /// currently loaded application. Unresolvable names contribute nothing.
    pub application_role: String,
    /// Restricts resolved unit scopes to units carrying this field.
    pub field_filter: Option<OrgFieldId>,
    /// Overrides the user assignment's unit as the subtree root.
    pub fixed_root_unit: Option<UnitId>,
}

impl RoleApplicationRoleAssignment {
    pub fn new(
        role: impl Into<RoleId>,
        application: impl Into<ApplicationName>,
        application_role: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            application: application.into(),
            application_role: application_role.into(),
            field_filter: None,
            fixed_root_unit: None,
        }
    }

    pub fn with_field_filter(mut self, field: impl Into<OrgFieldId>) -> Self {
        self.field_filter = Some(field.into());
        self
    }

    pub fn with_fixed_root(mut self, unit: impl Into<UnitId>) -> Self {
        self.fixed_root_unit = Some(unit.into());
        self
    }
}

/// Direct grant of selected privileges (and, depending on the group kind,
/// objects or an organizational scope) from a privilege group to a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePrivilegeAssignment {
    pub role: RoleId,
    pub application: ApplicationName,
    pub group: GroupName,
    /// Selected subset of the group's privileges. Empty means the whole
    /// group (the binary-grant case of the simple group kinds).
    pub privileges: Vec<PrivilegeName>,
    /// Privilege objects this grant is restricted to, for object-scoped
    /// group kinds.
    pub privilege_objects: Vec<ObjectId>,
    /// When set, an object whose declared parent chain contains a granted
    /// object is also covered.
    pub object_inheritance: bool,
    /// Restricts resolved unit scopes to units carrying this field.
    pub field_filter: Option<OrgFieldId>,
    /// Overrides the user assignment's unit as the subtree root.
    pub fixed_root_unit: Option<UnitId>,
    /// Restricts resolved unit scopes to these unit types; empty means no
    /// restriction.
    pub unit_type_filter: Vec<UnitTypeId>,
    /// When set, the grant covers the root unit only, not its descendants.
    pub no_unit_inheritance: bool,
}

impl RolePrivilegeAssignment {
    pub fn new(
        role: impl Into<RoleId>,
        application: impl Into<ApplicationName>,
        group: impl Into<GroupName>,
    ) -> Self {
        Self {
            role: role.into(),
            application: application.into(),
            group: group.into(),
            privileges: Vec::new(),
            privilege_objects: Vec::new(),
            object_inheritance: false,
            field_filter: None,
            fixed_root_unit: None,
            unit_type_filter: Vec::new(),
            no_unit_inheritance: false,
        }
    }

    pub fn with_privileges(mut self, privileges: Vec<PrivilegeName>) -> Self {
        self.privileges = privileges;
        self
    }

    pub fn with_objects(mut self, objects: Vec<ObjectId>) -> Self {
        self.privilege_objects = objects;
        self
    }

    pub fn with_object_inheritance(mut self) -> Self {
        self.object_inheritance = true;
        self
    }

    pub fn with_field_filter(mut self, field: impl Into<OrgFieldId>) -> Self {
        self.field_filter = Some(field.into());
        self
    }

    pub fn with_fixed_root(mut self, unit: impl Into<UnitId>) -> Self {
        self.fixed_root_unit = Some(unit.into());
        self
    }

    pub fn with_unit_type_filter(mut self, types: Vec<UnitTypeId>) -> Self {
        self.unit_type_filter = types;
        self
    }

    pub fn without_unit_inheritance(mut self) -> Self {
        self.no_unit_inheritance = true;
        self
    }
}

/// Binds a user to a role at an organizational unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRoleAssignment {
    pub user: UserId,
    pub role: RoleId,
    /// Root for subtree expansion of unit-scoped grants resolved through
    /// this assignment.
    pub organization_unit: UnitId,
    /// Caller-supplied object id, consumed by delegated-custom privilege
    /// groups when the role carries the delegated-object flag.
    pub delegated_privilege_object: Option<ObjectId>,
    pub main_responsible: bool,
}

impl UserRoleAssignment {
    pub fn new(
        user: impl Into<UserId>,
        role: impl Into<RoleId>,
        organization_unit: impl Into<UnitId>,
    ) -> Self {
        Self {
            user: user.into(),
            role: role.into(),
            organization_unit: organization_unit.into(),
            delegated_privilege_object: None,
            main_responsible: false,
        }
    }

    pub fn with_delegated_object(mut self, object: impl Into<ObjectId>) -> Self {
        self.delegated_privilege_object = Some(object.into());
        self
    }

    pub fn main_responsible(mut self) -> Self {
        self.main_responsible = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privilege_assignment_defaults_to_whole_group() {
        let assignment = RolePrivilegeAssignment::new("clerk", "docs", "documents");
        assert!(assignment.privileges.is_empty());
        assert!(!assignment.no_unit_inheritance);
        assert!(!assignment.object_inheritance);
    }

    #[test]
    fn test_user_role_assignment_carries_delegated_object() {
        let assignment =
            UserRoleAssignment::new("alice", "case-worker", "branch-1").with_delegated_object("case-42");
        assert_eq!(
            assignment.delegated_privilege_object,
            Some(ObjectId::from("case-42"))
        );
    }

    #[test]
    fn test_application_role_assignment_scope_overrides() {
        let assignment = RoleApplicationRoleAssignment::new("clerk", "docs", "editor")
            .with_field_filter("sales")
            .with_fixed_root("region-a");
        assert_eq!(assignment.field_filter, Some(OrgFieldId::from("sales")));
        assert_eq!(assignment.fixed_root_unit, Some(UnitId::from("region-a")));
    }
}
