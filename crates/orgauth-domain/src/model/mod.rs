//! Entity model: identifiers, organization directory, role graph, and
//! per-application privilege catalogs.

pub mod assignment;
pub mod catalog;
pub mod ids;
pub mod org;
pub mod role;

pub use assignment::{RoleApplicationRoleAssignment, RolePrivilegeAssignment, UserRoleAssignment};
pub use catalog::{Application, GroupKind, Privilege, PrivilegeGroup};
pub use ids::{
    ApplicationName, GroupName, ObjectId, OrgFieldId, PrivilegeName, RoleId, UnitId, UnitTypeId,
    UserId,
};
pub use org::{OrganizationUnit, OrganizationUnitType};
pub use role::Role;
