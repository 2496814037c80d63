//! Traits for the data-access operations needed by the engine.
//!
//! Implementations present a snapshot that stays consistent for the duration
//! of one check; the engine performs no locking of its own. Lookups return
//! `Ok(None)` (or empty collections) for anything that does not resolve:
//! a deleted role or an uninstalled application must never fail a check for
//! an unrelated application.

use async_trait::async_trait;

use crate::error::DomainResult;
use crate::model::{
    Application, ApplicationName, GroupName, ObjectId, OrganizationUnit, OrganizationUnitType,
    PrivilegeGroup, Role, RoleApplicationRoleAssignment, RoleId, RolePrivilegeAssignment, UnitId,
    UnitTypeId, UserId, UserRoleAssignment,
};

/// Read access to roles, organizational units, and assignments.
#[async_trait]
pub trait DirectoryReader: Send + Sync {
    /// Looks up a role by id.
    async fn role(&self, id: &RoleId) -> DomainResult<Option<Role>>;

    /// Looks up an organizational unit by id.
    async fn organization_unit(&self, id: &UnitId) -> DomainResult<Option<OrganizationUnit>>;

    /// Lists the direct children of a unit.
    async fn child_units(&self, id: &UnitId) -> DomainResult<Vec<OrganizationUnit>>;

    /// Looks up a unit type by id.
    async fn unit_type(&self, id: &UnitTypeId) -> DomainResult<Option<OrganizationUnitType>>;

    /// Lists all role assignments of a user.
    async fn user_role_assignments(&self, user: &UserId) -> DomainResult<Vec<UserRoleAssignment>>;

    /// Lists a role's delegations of external application roles.
    async fn application_role_assignments(
        &self,
        role: &RoleId,
    ) -> DomainResult<Vec<RoleApplicationRoleAssignment>>;

    /// Lists a role's direct privilege-group grants.
    async fn privilege_assignments(
        &self,
        role: &RoleId,
    ) -> DomainResult<Vec<RolePrivilegeAssignment>>;
}

/// Read access to the registry of currently loaded application modules.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// Looks up a loaded application. `None` when not loaded.
    async fn application(&self, name: &ApplicationName) -> DomainResult<Option<Application>>;

    /// Looks up a privilege group of a loaded application.
    async fn privilege_group(
        &self,
        application: &ApplicationName,
        group: &GroupName,
    ) -> DomainResult<Option<PrivilegeGroup>>;

    /// Resolves an external application-role name to a concrete role.
    ///
    /// Returns `None` when the application is not currently loaded or does
    /// not expose a role by that name.
    async fn application_role(
        &self,
        application: &ApplicationName,
        role_name: &str,
    ) -> DomainResult<Option<RoleId>>;

    /// Declared parent of a privilege object, for object-inheritance
    /// matching. `None` for roots and unknown objects.
    ///
    /// Default implementation reports no parentage; override when the
    /// application exposes an object hierarchy.
    async fn privilege_object_parent(
        &self,
        _application: &ApplicationName,
        _object: &ObjectId,
    ) -> DomainResult<Option<ObjectId>> {
        Ok(None)
    }
}
