//! Organizational units and unit types.
//!
//! Units form a forest: every unit has at most one parent, and a unit whose
//! parent id does not resolve is treated as its own root. The engine never
//! assumes the parent links are well-formed; all walks carry a visited set.

use serde::{Deserialize, Serialize};

use super::ids::{OrgFieldId, UnitId, UnitTypeId};

/// A node in the organizational hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationUnit {
    pub id: UnitId,
    /// Parent unit; `None` for roots. A dangling reference is tolerated and
    /// makes this unit its own root.
    pub parent: Option<UnitId>,
    pub unit_type: UnitTypeId,
    /// Optional classification dimension, matched against assignment
    /// field filters during scope resolution.
    pub field: Option<OrgFieldId>,
    /// Inactive units drop out of the active subtree used for scoping.
    pub active: bool,
    pub title: String,
}

impl OrganizationUnit {
    pub fn new(id: impl Into<UnitId>, unit_type: impl Into<UnitTypeId>) -> Self {
        let id = id.into();
        let title = id.to_string();
        Self {
            id,
            parent: None,
            unit_type: unit_type.into(),
            field: None,
            active: true,
            title,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<UnitId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<OrgFieldId>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// The type of an organizational unit, constraining legal tree shapes and
/// whether users may be assigned at units of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationUnitType {
    pub id: UnitTypeId,
    /// Unit types that may appear as direct children. Enforced by the
    /// administrative layer; the engine only reads it.
    pub allowed_child_types: Vec<UnitTypeId>,
    pub allows_user_assignment: bool,
    pub title: String,
}

impl OrganizationUnitType {
    pub fn new(id: impl Into<UnitTypeId>) -> Self {
        let id = id.into();
        let title = id.to_string();
        Self {
            id,
            allowed_child_types: Vec::new(),
            allows_user_assignment: true,
            title,
        }
    }

    pub fn with_child_types(mut self, child_types: Vec<UnitTypeId>) -> Self {
        self.allowed_child_types = child_types;
        self
    }

    pub fn without_user_assignment(mut self) -> Self {
        self.allows_user_assignment = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_defaults_to_active_root() {
        let unit = OrganizationUnit::new("hq", "company");
        assert!(unit.active);
        assert!(unit.parent.is_none());
        assert_eq!(unit.title, "hq");
    }

    #[test]
    fn test_unit_builder_chain() {
        let unit = OrganizationUnit::new("branch-1", "branch")
            .with_parent("region-a")
            .with_field("sales")
            .with_title("Branch One")
            .inactive();
        assert_eq!(unit.parent, Some(UnitId::from("region-a")));
        assert_eq!(unit.field, Some(OrgFieldId::from("sales")));
        assert_eq!(unit.title, "Branch One");
        assert!(!unit.active);
    }

    #[test]
    fn test_unit_type_user_assignment_flag() {
        let unit_type = OrganizationUnitType::new("region").without_user_assignment();
        assert!(!unit_type.allows_user_assignment);
    }
}
