//! Property tests over arbitrary (including cyclic) role graphs and unit
//! forests. The engine must terminate and produce duplicate-free results no
//! matter how the administrative data is misconfigured.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use crate::model::{OrganizationUnit, Role, RoleId, UnitId};
use crate::resolver::AuthorizationEngine;

use super::mocks::{MockCatalog, MockDirectory};

const ROLE_COUNT: usize = 6;

fn role_id(index: usize) -> RoleId {
    RoleId::from(format!("r{index}"))
}

/// Arbitrary directed edges over a fixed role set, split into
/// generalization and privilege-sending relations. Cycles and self-loops
/// are deliberately in range.
fn role_graph() -> impl Strategy<Value = Vec<Role>> {
    let edge = (0..ROLE_COUNT, 0..ROLE_COUNT, any::<bool>());
    prop::collection::vec(edge, 0..24).prop_map(|edges| {
        let mut roles: Vec<Role> = (0..ROLE_COUNT).map(|i| Role::new(role_id(i))).collect();
        for (from, to, sending) in edges {
            if sending {
                roles[from].privileges_sending_roles.push(role_id(to));
            } else {
                roles[from].generalization_roles.push(role_id(to));
                roles[to].specialization_roles.push(role_id(from));
            }
        }
        roles
    })
}

fn engine_over(roles: &[Role]) -> AuthorizationEngine<MockDirectory, MockCatalog> {
    let directory = MockDirectory::new();
    for role in roles {
        directory.add_role(role.clone());
    }
    AuthorizationEngine::new(Arc::new(directory), Arc::new(MockCatalog::new()))
}

proptest! {
    #[test]
    fn prop_privilege_closure_terminates_without_duplicates(roles in role_graph()) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let engine = engine_over(&roles);
            let start = role_id(0);
            let closure = engine.privilege_closure(&start).await.unwrap();

            prop_assert!(closure.contains(&start));
            prop_assert!(closure.len() <= ROLE_COUNT);
            let unique: HashSet<_> = closure.iter().collect();
            prop_assert_eq!(unique.len(), closure.len());
            Ok(())
        })?;
    }

    #[test]
    fn prop_specialization_closure_terminates_without_duplicates(roles in role_graph()) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let engine = engine_over(&roles);
            let start = role_id(0);
            let closure = engine.specialization_closure(&start).await.unwrap();

            prop_assert!(closure.contains(&start));
            prop_assert!(closure.len() <= ROLE_COUNT);
            let unique: HashSet<_> = closure.iter().collect();
            prop_assert_eq!(unique.len(), closure.len());
            Ok(())
        })?;
    }

    #[test]
    fn prop_closure_grows_monotonically_with_edges(
        mut roles in role_graph(),
        extra_from in 0..ROLE_COUNT,
        extra_to in 0..ROLE_COUNT,
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let start = role_id(0);
            let before = engine_over(&roles).privilege_closure(&start).await.unwrap();

            // One more generalization edge can only widen the closure.
            roles[extra_from].generalization_roles.push(role_id(extra_to));
            let after = engine_over(&roles).privilege_closure(&start).await.unwrap();

            for role in &before {
                prop_assert!(after.contains(role));
            }
            Ok(())
        })?;
    }

    /// Subtree and ancestor walks terminate on arbitrary parent wiring,
    /// dangling references and cycles included.
    #[test]
    fn prop_unit_walks_terminate(parents in prop::collection::vec(prop::option::of(0..8usize), 8)) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let directory = MockDirectory::new();
            for (index, parent) in parents.iter().enumerate() {
                let mut unit = OrganizationUnit::new(format!("u{index}"), "unit");
                if let Some(parent) = parent {
                    unit = unit.with_parent(format!("u{parent}"));
                }
                directory.add_unit(unit);
            }
            let engine = AuthorizationEngine::new(
                Arc::new(directory),
                Arc::new(MockCatalog::new()),
            );

            let root = UnitId::from("u0");
            let scope = engine.subtree(&root, &[], None, false).await.unwrap();
            prop_assert!(scope.len() <= 8);
            prop_assert!(scope.contains(&root));

            let path = engine.ancestors(&root).await.unwrap();
            prop_assert!(path.len() <= 8);
            prop_assert_eq!(path.last(), Some(&root));
            Ok(())
        })?;
    }
}
