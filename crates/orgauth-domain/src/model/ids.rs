//! Identifier newtypes.
//!
//! All entities are referenced by id; edges between entities are stored as id
//! lists and every traversal works over ids plus a visited set. Nothing in
//! the engine relies on reference identity.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

id_type!(
    /// Identifies a role in the role graph.
    RoleId
);
id_type!(
    /// Identifies an organizational unit.
    UnitId
);
id_type!(
    /// Identifies an organizational-unit type.
    UnitTypeId
);
id_type!(
    /// Identifies a user. Users only touch the role graph through
    /// user-role assignments.
    UserId
);
id_type!(
    /// Identifies an application-defined privilege object.
    ObjectId
);
id_type!(
    /// Identifies an organizational field, an optional classification
    /// dimension on units and roles.
    OrgFieldId
);
id_type!(
    /// Name of a loaded application module.
    ApplicationName
);
id_type!(
    /// Name of a privilege group within an application.
    GroupName
);
id_type!(
    /// Name of a single privilege within a group.
    PrivilegeName
);

impl PrivilegeName {
    /// Conventional read privilege, used by the `is_read_access` sugar.
    pub fn read() -> Self {
        Self::new("read")
    }
}
