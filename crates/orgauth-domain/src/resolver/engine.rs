//! The resolution engine.
//!
//! Turns a user's role assignments into an allow/deny verdict by expanding
//! the role graph's privilege closure, resolving organizational scope per
//! assignment, and matching against the privilege catalog's group-kind
//! rules. The merge is a pure union: more assignments can only widen what a
//! user may do, and there is no deny concept anywhere.
//!
//! # Architecture Decisions
//!
//! - **Cycle Safety**: role edges and unit parent links come from
//!   administrative data that may contain cycles. Closure and subtree walks
//!   are iterative with explicit stacks and visited sets; delegation chains
//!   carry a visited set of (application, role) pairs.
//!
//! - **Soft Failure**: a missing role, unit, group, or application
//!   contributes nothing and is logged at debug level. One uninstalled
//!   application must never fail a check for another.
//!
//! - **Parallel Assignment Evaluation**: a user's role assignments vote
//!   independently, so they are evaluated through `FuturesUnordered` with
//!   short-circuiting on the first allow.

use std::collections::{BTreeMap, HashSet};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, warn};

use crate::cache::DecisionKey;
use crate::error::{DomainError, DomainResult};
use crate::model::{
    ApplicationName, GroupKind, GroupName, ObjectId, OrgFieldId, OrganizationUnit, PrivilegeGroup,
    PrivilegeName, Role, RoleId, RolePrivilegeAssignment, UnitId, UnitTypeId, UserId,
    UserRoleAssignment,
};

use super::config::ResolverConfig;
use super::context::DelegationContext;
use super::traits::{CatalogReader, DirectoryReader};
use super::types::{
    AccessContext, CheckRequest, CheckResult, EffectiveApplication, EffectiveGroup,
    EffectivePrivilege, EffectivePrivileges, MergeScope, MergedPrivileges, PrivilegeBucket,
};

/// Metrics for decision-cache performance monitoring.
#[derive(Debug, Default)]
pub struct CacheMetrics {
    /// Number of cache hits (verdict found in cache).
    pub hits: AtomicU64,
    /// Number of cache misses (verdict required full resolution).
    pub misses: AtomicU64,
}

impl CacheMetrics {
    /// Returns a snapshot of the current metrics.
    pub fn snapshot(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Returns the cache hit ratio (hits / (hits + misses)).
    /// Returns 0.0 if no lookups have occurred.
    pub fn hit_ratio(&self) -> f64 {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }
}

/// A point-in-time snapshot of cache metrics.
#[derive(Debug, Clone, Copy)]
pub struct CacheMetricsSnapshot {
    pub hits: u64,
    pub misses: u64,
}

/// Type alias for boxed future to handle async recursion.
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Which edge sets a role closure follows.
#[derive(Debug, Clone, Copy)]
enum ClosureEdges {
    /// `specialization_roles` only: a more specific role counts as an
    /// instance of its generalization.
    Specialization,
    /// `generalization_roles` plus `privileges_sending_roles`: everything a
    /// role is authorized to do.
    Privilege,
}

/// Scope overrides an application-role delegation imposes on the grants it
/// pulls in. The outermost delegation (closest to the user) wins.
#[derive(Debug, Clone, Default)]
struct ScopeOverride {
    field_filter: Option<OrgFieldId>,
    fixed_root_unit: Option<UnitId>,
}

impl ScopeOverride {
    fn layered_under(&self, outer: &ScopeOverride) -> ScopeOverride {
        ScopeOverride {
            field_filter: outer.field_filter.clone().or_else(|| self.field_filter.clone()),
            fixed_root_unit: outer
                .fixed_root_unit
                .clone()
                .or_else(|| self.fixed_root_unit.clone()),
        }
    }
}

/// Authorization engine over a directory and catalog snapshot.
///
/// Resolution is read-only: the engine holds no mutable state beyond cache
/// metrics, and concurrent checks need no coordination as long as the
/// readers present a consistent snapshot.
pub struct AuthorizationEngine<D, C> {
    directory: Arc<D>,
    catalog: Arc<C>,
    config: ResolverConfig,
    cache_metrics: CacheMetrics,
}

impl<D, C> AuthorizationEngine<D, C>
where
    D: DirectoryReader,
    C: CatalogReader,
{
    /// Creates a new engine with default configuration.
    pub fn new(directory: Arc<D>, catalog: Arc<C>) -> Self {
        Self {
            directory,
            catalog,
            config: ResolverConfig::default(),
            cache_metrics: CacheMetrics::default(),
        }
    }

    /// Creates a new engine with custom configuration.
    pub fn with_config(directory: Arc<D>, catalog: Arc<C>, config: ResolverConfig) -> Self {
        Self {
            directory,
            catalog,
            config,
            cache_metrics: CacheMetrics::default(),
        }
    }

    /// Returns the cache metrics for monitoring.
    pub fn cache_metrics(&self) -> &CacheMetrics {
        &self.cache_metrics
    }

    // ============================================================
    // Decision API
    // ============================================================

    /// Performs a privilege check.
    ///
    /// Evaluates every role assignment of the user and returns allowed on
    /// the first one that satisfies all conditions applicable to the
    /// group's kind. Missing references contribute nothing.
    pub async fn check(&self, request: &CheckRequest) -> DomainResult<CheckResult> {
        self.validate_request(request)?;

        // A cache that is configured but disabled is bypassed entirely.
        let cache_and_key = self
            .config
            .cache
            .as_ref()
            .filter(|cache| cache.is_enabled())
            .map(|cache| (cache, DecisionKey::from_request(request)));

        if let Some((cache, key)) = &cache_and_key {
            if let Some(allowed) = cache.get(key).await {
                self.cache_metrics.hits.fetch_add(1, Ordering::Relaxed);
                return Ok(CheckResult { allowed });
            }
            self.cache_metrics.misses.fetch_add(1, Ordering::Relaxed);
        }

        let assignments = self.directory.user_role_assignments(&request.user).await?;

        // Assignments vote independently; first allow wins.
        let mut votes: FuturesUnordered<_> = assignments
            .iter()
            .map(|assignment| self.assignment_allows(assignment, request))
            .collect();

        let mut allowed = false;
        while let Some(vote) = votes.next().await {
            if vote? {
                allowed = true;
                break;
            }
        }
        drop(votes);

        if let Some((cache, key)) = cache_and_key {
            cache.insert(key, allowed).await;
        }

        Ok(CheckResult { allowed })
    }

    /// Context-free convenience form of [`check`](Self::check).
    pub async fn is_allowed(
        &self,
        user: &UserId,
        application: &ApplicationName,
        group: &GroupName,
        privilege: &PrivilegeName,
    ) -> DomainResult<bool> {
        let request = CheckRequest {
            user: user.clone(),
            application: application.clone(),
            group: group.clone(),
            privilege: privilege.clone(),
            context: AccessContext::None,
        };
        Ok(self.check(&request).await?.allowed)
    }

    /// Sugar for the conventional `read` privilege.
    pub async fn is_read_access(
        &self,
        user: &UserId,
        application: &ApplicationName,
        group: &GroupName,
    ) -> DomainResult<bool> {
        self.is_allowed(user, application, group, &PrivilegeName::read())
            .await
    }

    /// Returns the union of resolved organizational scopes across all of the
    /// user's assignments that grant `privilege` in `group`.
    ///
    /// This is the inverse query of [`check`](Self::check); the UI layer uses
    /// it to restrict which units a user may browse.
    pub async fn allowed_units(
        &self,
        user: &UserId,
        application: &ApplicationName,
        group: &GroupName,
        privilege: &PrivilegeName,
    ) -> DomainResult<HashSet<UnitId>> {
        let assignments = self.directory.user_role_assignments(user).await?;

        let mut units = HashSet::new();
        for assignment in &assignments {
            let Some(role) = self.assignable_role(assignment).await? else {
                continue;
            };
            let scope = Self::merge_scope(assignment, &role);
            let merged = self.merge_privileges(&assignment.role, &scope).await?;
            if let Some(bucket) = merged.bucket(application, group) {
                if bucket.privileges.contains(privilege) {
                    units.extend(bucket.scope_units.iter().cloned());
                }
            }
        }
        Ok(units)
    }

    /// Evaluates a single user-role assignment against the request.
    async fn assignment_allows(
        &self,
        assignment: &UserRoleAssignment,
        request: &CheckRequest,
    ) -> DomainResult<bool> {
        let Some(role) = self.assignable_role(assignment).await? else {
            return Ok(false);
        };

        let scope = Self::merge_scope(assignment, &role);
        let merged = self.merge_privileges(&assignment.role, &scope).await?;

        let Some(bucket) = merged.bucket(&request.application, &request.group) else {
            return Ok(false);
        };
        if !bucket.privileges.contains(&request.privilege) {
            return Ok(false);
        }

        // The group's current kind drives which conditions apply; a bucket
        // only exists when the group resolved during the merge.
        let Some(group) = self
            .catalog
            .privilege_group(&request.application, &request.group)
            .await?
        else {
            return Ok(false);
        };

        self.bucket_satisfies(bucket, group.kind, request).await
    }

    /// Resolves the assignment's role, rejecting roles that may not carry
    /// direct memberships.
    async fn assignable_role(
        &self,
        assignment: &UserRoleAssignment,
    ) -> DomainResult<Option<Role>> {
        let Some(role) = self.directory.role(&assignment.role).await? else {
            debug!(role = %assignment.role, "assignment references a missing role");
            return Ok(None);
        };
        if role.no_direct_memberships {
            warn!(
                role = %role.id,
                user = %assignment.user,
                "direct membership on a generalization-only role; ignoring assignment"
            );
            return Ok(None);
        }
        Ok(Some(role))
    }

    fn merge_scope(assignment: &UserRoleAssignment, role: &Role) -> MergeScope {
        MergeScope {
            unit: Some(assignment.organization_unit.clone()),
            delegated_object: if role.delegated_custom_privilege_object_role {
                assignment.delegated_privilege_object.clone()
            } else {
                None
            },
        }
    }

    /// Applies the group-kind decision table to a merged bucket.
    async fn bucket_satisfies(
        &self,
        bucket: &PrivilegeBucket,
        kind: GroupKind,
        request: &CheckRequest,
    ) -> DomainResult<bool> {
        match kind {
            GroupKind::SimplePrivilege | GroupKind::StandardPrivilegeGroup => Ok(true),
            GroupKind::SimpleOrganizationalPrivilege | GroupKind::OrganizationalPrivilegeGroup => {
                match &request.context {
                    AccessContext::Unit(unit) => Ok(bucket.scope_units.contains(unit)),
                    _ => Ok(false),
                }
            }
            GroupKind::SimpleCustomObjectPrivilege | GroupKind::CustomObjectPrivilegeGroup => {
                match &request.context {
                    AccessContext::Object(object) => {
                        if bucket.privilege_objects.contains(object) {
                            return Ok(true);
                        }
                        if bucket.object_inheritance {
                            self.object_ancestor_granted(
                                &request.application,
                                object,
                                &bucket.privilege_objects,
                            )
                            .await
                        } else {
                            Ok(false)
                        }
                    }
                    _ => Ok(false),
                }
            }
            GroupKind::RoleAssignmentDelegatedCustomPrivilegeGroup => match &request.context {
                AccessContext::Object(object) => Ok(bucket.delegated_objects.contains(object)),
                _ => Ok(false),
            },
        }
    }

    /// Walks an object's declared parent chain looking for a granted
    /// ancestor. Cycle-safe; unknown parents end the walk.
    async fn object_ancestor_granted(
        &self,
        application: &ApplicationName,
        object: &ObjectId,
        granted: &HashSet<ObjectId>,
    ) -> DomainResult<bool> {
        let mut visited = HashSet::new();
        visited.insert(object.clone());
        let mut current = object.clone();
        while let Some(parent) = self
            .catalog
            .privilege_object_parent(application, &current)
            .await?
        {
            if !visited.insert(parent.clone()) {
                break;
            }
            if granted.contains(&parent) {
                return Ok(true);
            }
            current = parent;
        }
        Ok(false)
    }

    // ============================================================
    // Merge engine
    // ============================================================

    /// Merges everything `role`'s privilege closure grants, under the given
    /// scope, into per-(application, group) buckets.
    ///
    /// Multiple grants to the same group combine by set union of privileges,
    /// scope units, and objects; a broader closure can only add rights.
    pub async fn merge_privileges(
        &self,
        role: &RoleId,
        scope: &MergeScope,
    ) -> DomainResult<MergedPrivileges> {
        let mut merged = MergedPrivileges::default();
        let ctx = DelegationContext::new();
        let closure = self.closure(role, ClosureEdges::Privilege).await?;
        for closure_role in &closure {
            self.collect_role_grants(closure_role, scope, None, &ctx, &mut merged)
                .await?;
        }
        Ok(merged)
    }

    /// Unions one role's direct grants and delegations into the buckets.
    ///
    /// Boxed for recursion: an application role may itself delegate further
    /// application roles. The delegation context bounds depth and cuts off
    /// mutual delegation.
    fn collect_role_grants<'a>(
        &'a self,
        role: &'a RoleId,
        scope: &'a MergeScope,
        overrides: Option<&'a ScopeOverride>,
        ctx: &'a DelegationContext,
        merged: &'a mut MergedPrivileges,
    ) -> BoxFuture<'a, DomainResult<()>> {
        Box::pin(async move {
            for grant in self.directory.privilege_assignments(role).await? {
                self.union_privilege_assignment(&grant, scope, overrides, merged)
                    .await?;
            }

            for delegation in self.directory.application_role_assignments(role).await? {
                let Some(delegate) = self
                    .catalog
                    .application_role(&delegation.application, &delegation.application_role)
                    .await?
                else {
                    debug!(
                        application = %delegation.application,
                        application_role = %delegation.application_role,
                        "application role not resolvable; skipping delegation"
                    );
                    continue;
                };

                if ctx.contains(&delegation.application, &delegate) {
                    continue;
                }
                if ctx.depth >= self.config.max_delegation_depth {
                    warn!(
                        application = %delegation.application,
                        role = %delegate,
                        max = self.config.max_delegation_depth,
                        "delegation chain too deep; truncating"
                    );
                    continue;
                }

                let own = ScopeOverride {
                    field_filter: delegation.field_filter.clone(),
                    fixed_root_unit: delegation.fixed_root_unit.clone(),
                };
                let effective = match overrides {
                    Some(outer) => own.layered_under(outer),
                    None => own,
                };

                let next_ctx = ctx.descend(&delegation.application, &delegate);
                let delegate_closure = self.closure(&delegate, ClosureEdges::Privilege).await?;
                for closure_role in &delegate_closure {
                    self.collect_role_grants(
                        closure_role,
                        scope,
                        Some(&effective),
                        &next_ctx,
                        merged,
                    )
                    .await?;
                }
            }

            Ok(())
        })
    }

    /// Unions a single privilege-group grant into its bucket, applying the
    /// group kind's scoping semantics.
    async fn union_privilege_assignment(
        &self,
        grant: &RolePrivilegeAssignment,
        scope: &MergeScope,
        overrides: Option<&ScopeOverride>,
        merged: &mut MergedPrivileges,
    ) -> DomainResult<()> {
        let Some(group) = self
            .catalog
            .privilege_group(&grant.application, &grant.group)
            .await?
        else {
            debug!(
                application = %grant.application,
                group = %grant.group,
                "privilege group not loaded; grant contributes nothing"
            );
            return Ok(());
        };

        // An empty selection means the whole group; an explicit selection is
        // intersected with what the group still declares, so a privilege
        // removed from the catalog cannot be granted through a stale grant.
        let granted: Vec<PrivilegeName> = if grant.privileges.is_empty() {
            group.privileges.iter().map(|p| p.name.clone()).collect()
        } else {
            grant
                .privileges
                .iter()
                .filter(|p| group.declares(p))
                .cloned()
                .collect()
        };

        let bucket = merged.bucket_mut(&grant.application, &grant.group);
        bucket.privileges.extend(granted);

        // Fields a kind does not use are ignored: a grant whose data no
        // longer matches the group's kind degrades to "no scoping, no
        // objects" instead of widening access.
        match group.kind {
            GroupKind::SimplePrivilege | GroupKind::StandardPrivilegeGroup => {}
            GroupKind::SimpleOrganizationalPrivilege | GroupKind::OrganizationalPrivilegeGroup => {
                let fixed_root = overrides
                    .and_then(|o| o.fixed_root_unit.clone())
                    .or_else(|| grant.fixed_root_unit.clone());
                let root = fixed_root.or_else(|| scope.unit.clone());
                if let Some(root) = root {
                    let field_filter = overrides
                        .and_then(|o| o.field_filter.clone())
                        .or_else(|| grant.field_filter.clone());
                    let units = self
                        .subtree(
                            &root,
                            &grant.unit_type_filter,
                            field_filter.as_ref(),
                            grant.no_unit_inheritance,
                        )
                        .await?;
                    // Borrow of `merged` was released while walking the tree.
                    let bucket = merged.bucket_mut(&grant.application, &grant.group);
                    bucket.scope_units.extend(units);
                }
            }
            GroupKind::SimpleCustomObjectPrivilege | GroupKind::CustomObjectPrivilegeGroup => {
                bucket
                    .privilege_objects
                    .extend(grant.privilege_objects.iter().cloned());
                bucket.object_inheritance |= grant.object_inheritance;
            }
            GroupKind::RoleAssignmentDelegatedCustomPrivilegeGroup => {
                if let Some(object) = &scope.delegated_object {
                    bucket.delegated_objects.insert(object.clone());
                }
            }
        }

        Ok(())
    }

    // ============================================================
    // Organization tree
    // ============================================================

    /// Expands a unit into its scoped subtree.
    ///
    /// With `no_inheritance` the result is at most the unit itself; otherwise
    /// the unit plus all active descendants passing the type and field
    /// filters (empty type filter = unrestricted). The walk is iterative with
    /// a visited set, so malformed parent/child links cannot loop it.
    pub async fn subtree(
        &self,
        root: &UnitId,
        type_filter: &[UnitTypeId],
        field_filter: Option<&OrgFieldId>,
        no_inheritance: bool,
    ) -> DomainResult<HashSet<UnitId>> {
        let mut scope = HashSet::new();
        let Some(root_unit) = self.directory.organization_unit(root).await? else {
            debug!(unit = %root, "scope root does not resolve; empty scope");
            return Ok(scope);
        };

        if no_inheritance {
            if root_unit.active && Self::unit_matches(&root_unit, type_filter, field_filter) {
                scope.insert(root_unit.id);
            }
            return Ok(scope);
        }

        let mut visited = HashSet::new();
        visited.insert(root_unit.id.clone());
        let mut stack = vec![root_unit];

        while let Some(unit) = stack.pop() {
            if !unit.active {
                // Inactive units drop out together with their subtree.
                continue;
            }
            if Self::unit_matches(&unit, type_filter, field_filter) {
                scope.insert(unit.id.clone());
            }
            for child in self.directory.child_units(&unit.id).await? {
                if visited.insert(child.id.clone()) {
                    stack.push(child);
                }
            }
        }

        Ok(scope)
    }

    fn unit_matches(
        unit: &OrganizationUnit,
        type_filter: &[UnitTypeId],
        field_filter: Option<&OrgFieldId>,
    ) -> bool {
        if !type_filter.is_empty() && !type_filter.contains(&unit.unit_type) {
            return false;
        }
        match field_filter {
            Some(field) => unit.field.as_ref() == Some(field),
            None => true,
        }
    }

    /// Returns the path from the root to `unit`, inclusive. Display only;
    /// never security-relevant. A dangling parent ends the path, making the
    /// unit (or its highest resolvable ancestor) the root.
    pub async fn ancestors(&self, unit: &UnitId) -> DomainResult<Vec<UnitId>> {
        let mut path = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(unit.clone());

        while let Some(id) = current {
            if !visited.insert(id.clone()) {
                break;
            }
            let Some(unit) = self.directory.organization_unit(&id).await? else {
                break;
            };
            path.push(unit.id);
            current = unit.parent;
        }

        path.reverse();
        Ok(path)
    }

    // ============================================================
    // Role closures
    // ============================================================

    /// The role plus all roles reachable via specialization edges: the set
    /// of roles whose holders effectively hold `role`.
    pub async fn specialization_closure(&self, role: &RoleId) -> DomainResult<Vec<RoleId>> {
        self.closure(role, ClosureEdges::Specialization).await
    }

    /// The role plus all roles reachable via generalization and
    /// privilege-sending edges: everything the role is authorized as.
    pub async fn privilege_closure(&self, role: &RoleId) -> DomainResult<Vec<RoleId>> {
        self.closure(role, ClosureEdges::Privilege).await
    }

    /// Iterative closure walk; tolerates cycles and missing roles.
    async fn closure(&self, start: &RoleId, edges: ClosureEdges) -> DomainResult<Vec<RoleId>> {
        let mut order = vec![start.clone()];
        let mut seen: HashSet<RoleId> = HashSet::new();
        seen.insert(start.clone());
        let mut stack = vec![start.clone()];

        while let Some(id) = stack.pop() {
            let Some(role) = self.directory.role(&id).await? else {
                debug!(role = %id, "closure edge to a missing role");
                continue;
            };
            let next: Vec<&RoleId> = match edges {
                ClosureEdges::Specialization => role.specialization_roles.iter().collect(),
                ClosureEdges::Privilege => role
                    .generalization_roles
                    .iter()
                    .chain(role.privileges_sending_roles.iter())
                    .collect(),
            };
            for neighbor in next {
                if seen.insert(neighbor.clone()) {
                    order.push(neighbor.clone());
                    stack.push(neighbor.clone());
                }
            }
        }

        Ok(order)
    }

    // ============================================================
    // Display view
    // ============================================================

    /// Computes the title-sorted effective privileges of a role for the
    /// administrative "effective privileges" view.
    ///
    /// Runs without a user assignment, so unit-scoped grants resolve only
    /// their fixed roots. Titles come from the catalog; unloaded
    /// applications simply do not appear.
    pub async fn effective_privileges(&self, role: &RoleId) -> DomainResult<EffectivePrivileges> {
        let merged = self
            .merge_privileges(role, &MergeScope::unassigned())
            .await?;

        // Keyed by (title, name) for a stable, title-ordered result.
        let mut applications: BTreeMap<(String, ApplicationName), EffectiveApplication> =
            BTreeMap::new();

        for ((app_name, group_name), bucket) in &merged.buckets {
            let Some(group) = self.catalog.privilege_group(app_name, group_name).await? else {
                continue;
            };
            let app_title = match self.catalog.application(app_name).await? {
                Some(app) => app.title,
                None => app_name.to_string(),
            };

            let entry = applications
                .entry((app_title.clone(), app_name.clone()))
                .or_insert_with(|| EffectiveApplication {
                    name: app_name.clone(),
                    title: app_title,
                    groups: Vec::new(),
                });
            entry.groups.push(Self::effective_group(&group, bucket));
        }

        let mut result = EffectivePrivileges::default();
        for (_, mut application) in applications {
            application
                .groups
                .sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.name.cmp(&b.name)));
            result.applications.push(application);
        }
        Ok(result)
    }

    fn effective_group(group: &PrivilegeGroup, bucket: &PrivilegeBucket) -> EffectiveGroup {
        let mut privileges: Vec<EffectivePrivilege> = group
            .privileges
            .iter()
            .filter(|p| bucket.privileges.contains(&p.name))
            .map(|p| EffectivePrivilege {
                name: p.name.clone(),
                title: p.title.clone(),
            })
            .collect();
        privileges.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.name.cmp(&b.name)));

        let mut scope_units: Vec<UnitId> = bucket.scope_units.iter().cloned().collect();
        scope_units.sort();
        let mut privilege_objects: Vec<ObjectId> = bucket
            .privilege_objects
            .iter()
            .chain(bucket.delegated_objects.iter())
            .cloned()
            .collect();
        privilege_objects.sort();
        privilege_objects.dedup();

        EffectiveGroup {
            name: group.name.clone(),
            title: group.title.clone(),
            kind: group.kind,
            privileges,
            scope_units,
            privilege_objects,
        }
    }

    // ============================================================
    // Validation
    // ============================================================

    fn validate_request(&self, request: &CheckRequest) -> DomainResult<()> {
        if request.user.is_empty() {
            return Err(DomainError::InvalidRequest {
                message: "user must not be empty".to_string(),
            });
        }
        if request.application.is_empty() {
            return Err(DomainError::InvalidRequest {
                message: "application must not be empty".to_string(),
            });
        }
        if request.group.is_empty() {
            return Err(DomainError::InvalidRequest {
                message: "privilege group must not be empty".to_string(),
            });
        }
        if request.privilege.is_empty() {
            return Err(DomainError::InvalidRequest {
                message: "privilege must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
