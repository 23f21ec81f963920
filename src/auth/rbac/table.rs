//! Role to permission grant table

use crate::utils::error::{RbacError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use super::types::{Permission, Role};

/// Static mapping from each role to the permissions it grants
///
/// Every role has an entry, possibly empty. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGrantTable {
    grants: HashMap<Role, HashSet<Permission>>,
}

impl Default for RoleGrantTable {
    fn default() -> Self {
        use Permission::*;

        let viewer = [InvestigationRead, EvidenceRead, ReportRead];
        let analyst = [
            InvestigationCreate,
            InvestigationRead,
            InvestigationUpdate,
            EvidenceUpload,
            EvidenceRead,
            ReportCreate,
            ReportRead,
            ReportExport,
        ];

        let mut grants: HashMap<Role, HashSet<Permission>> = HashMap::new();
        grants.insert(Role::Admin, Permission::all().iter().copied().collect());
        grants.insert(Role::Analyst, analyst.into_iter().collect());
        grants.insert(Role::Viewer, viewer.into_iter().collect());
        Self { grants }
    }
}

impl RoleGrantTable {
    /// Build a table from explicit grants
    ///
    /// Fails if any role in the enumeration has no entry.
    pub fn from_grants<I, P>(grants: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Role, P)>,
        P: IntoIterator<Item = Permission>,
    {
        let grants: HashMap<Role, HashSet<Permission>> = grants
            .into_iter()
            .map(|(role, permissions)| (role, permissions.into_iter().collect()))
            .collect();

        let missing: Vec<&str> = Role::all()
            .iter()
            .filter(|role| !grants.contains_key(*role))
            .map(Role::as_str)
            .collect();
        if !missing.is_empty() {
            return Err(RbacError::validation(format!(
                "Grant table has no entry for role(s): {}",
                missing.join(", ")
            )));
        }

        Ok(Self { grants })
    }

    /// Permissions granted to a role
    pub fn permissions(&self, role: Role) -> Option<&HashSet<Permission>> {
        self.grants.get(&role)
    }

    /// Whether `role` is granted `permission`
    pub fn grants(&self, role: Role, permission: Permission) -> bool {
        self.grants
            .get(&role)
            .is_some_and(|permissions| permissions.contains(&permission))
    }

    /// Whether every permission of `lower` is also granted to `higher`
    pub fn is_subset_of(&self, lower: Role, higher: Role) -> bool {
        match (self.grants.get(&lower), self.grants.get(&higher)) {
            (Some(lower), Some(higher)) => lower.is_subset(higher),
            (None, _) => true,
            (Some(lower), None) => lower.is_empty(),
        }
    }

    /// Check that no role grants more than a role ranked above it
    pub fn validate_hierarchy(&self) -> Result<()> {
        let mut ranked: Vec<Role> = Role::all().to_vec();
        ranked.sort_by_key(Role::rank);

        for pair in ranked.windows(2) {
            let (lower, higher) = (pair[0], pair[1]);
            if !self.is_subset_of(lower, higher) {
                let mut extra: Vec<&str> = self
                    .permissions(lower)
                    .into_iter()
                    .flatten()
                    .filter(|p| !self.grants(higher, **p))
                    .map(Permission::as_str)
                    .collect();
                extra.sort_unstable();
                return Err(RbacError::validation(format!(
                    "Role '{}' grants permissions that '{}' lacks: {}",
                    lower,
                    higher,
                    extra.join(", ")
                )));
            }
        }

        Ok(())
    }

    /// Number of (role, permission) grants
    pub fn len(&self) -> usize {
        self.grants.values().map(HashSet::len).sum()
    }

    /// Whether the table grants nothing at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ordered view, for display and serialization
    pub fn to_sorted(&self) -> BTreeMap<Role, BTreeSet<Permission>> {
        self.grants
            .iter()
            .map(|(role, permissions)| (*role, permissions.iter().copied().collect()))
            .collect()
    }
}

impl Serialize for RoleGrantTable {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_sorted().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RoleGrantTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let grants = BTreeMap::<Role, BTreeSet<Permission>>::deserialize(deserializer)?;
        RoleGrantTable::from_grants(grants).map_err(serde::de::Error::custom)
    }
}
