//! Per-application privilege catalogs.
//!
//! Each loaded application contributes a set of privilege groups. A group's
//! kind decides what "scope" means for grants against it: nothing, an
//! organizational-unit subtree, or a set of application-defined privilege
//! objects. The kind enum is closed on purpose: decision logic matches on it
//! exhaustively, so a new kind cannot be added without updating the
//! decision table.

use serde::{Deserialize, Serialize};

use super::ids::{ApplicationName, GroupName, PrivilegeName};

/// A loaded application module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub name: ApplicationName,
    pub title: String,
}

impl Application {
    pub fn new(name: impl Into<ApplicationName>) -> Self {
        let name = name.into();
        let title = name.to_string();
        Self { name, title }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// How grants against a privilege group are scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKind {
    /// Global, binary grant. No unit scoping, no objects.
    SimplePrivilege,
    /// Binary grant scoped to an organizational-unit subtree.
    SimpleOrganizationalPrivilege,
    /// Binary grant scoped to specific privilege objects.
    SimpleCustomObjectPrivilege,
    /// Named privilege subset, global.
    StandardPrivilegeGroup,
    /// Named privilege subset, unit-scoped.
    OrganizationalPrivilegeGroup,
    /// Named privilege subset, object-scoped.
    CustomObjectPrivilegeGroup,
    /// Object-scoped, but the object id is supplied when a user is assigned
    /// to a role, not when the grant is defined.
    RoleAssignmentDelegatedCustomPrivilegeGroup,
}

impl GroupKind {
    /// Whether grants against this kind resolve an organizational scope.
    pub fn unit_scoped(self) -> bool {
        matches!(
            self,
            GroupKind::SimpleOrganizationalPrivilege | GroupKind::OrganizationalPrivilegeGroup
        )
    }

    /// Whether grants against this kind carry privilege objects.
    pub fn object_scoped(self) -> bool {
        matches!(
            self,
            GroupKind::SimpleCustomObjectPrivilege
                | GroupKind::CustomObjectPrivilegeGroup
                | GroupKind::RoleAssignmentDelegatedCustomPrivilegeGroup
        )
    }
}

/// A single named privilege within a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Privilege {
    pub name: PrivilegeName,
    pub title: String,
}

impl Privilege {
    pub fn new(name: impl Into<PrivilegeName>) -> Self {
        let name = name.into();
        let title = name.to_string();
        Self { name, title }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// An application-defined bundle of related privileges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivilegeGroup {
    pub application: ApplicationName,
    pub name: GroupName,
    pub title: String,
    pub kind: GroupKind,
    /// Ordered as declared by the application; order matters for display
    /// only, never for decisions.
    pub privileges: Vec<Privilege>,
}

impl PrivilegeGroup {
    pub fn new(
        application: impl Into<ApplicationName>,
        name: impl Into<GroupName>,
        kind: GroupKind,
    ) -> Self {
        let name = name.into();
        let title = name.to_string();
        Self {
            application: application.into(),
            name,
            title,
            kind,
            privileges: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_privileges(mut self, privileges: Vec<Privilege>) -> Self {
        self.privileges = privileges;
        self
    }

    /// True if the group declares a privilege by this name.
    pub fn declares(&self, privilege: &PrivilegeName) -> bool {
        self.privileges.iter().any(|p| &p.name == privilege)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_kind_scoping_predicates() {
        assert!(GroupKind::SimpleOrganizationalPrivilege.unit_scoped());
        assert!(GroupKind::OrganizationalPrivilegeGroup.unit_scoped());
        assert!(!GroupKind::SimplePrivilege.unit_scoped());
        assert!(!GroupKind::CustomObjectPrivilegeGroup.unit_scoped());

        assert!(GroupKind::SimpleCustomObjectPrivilege.object_scoped());
        assert!(GroupKind::CustomObjectPrivilegeGroup.object_scoped());
        assert!(GroupKind::RoleAssignmentDelegatedCustomPrivilegeGroup.object_scoped());
        assert!(!GroupKind::StandardPrivilegeGroup.object_scoped());
    }

    #[test]
    fn test_group_declares_privilege() {
        let group = PrivilegeGroup::new("docs", "documents", GroupKind::StandardPrivilegeGroup)
            .with_privileges(vec![Privilege::new("read"), Privilege::new("edit")]);
        assert!(group.declares(&PrivilegeName::from("edit")));
        assert!(!group.declares(&PrivilegeName::from("delete")));
    }
}
