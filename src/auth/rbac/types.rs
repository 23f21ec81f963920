//! RBAC type definitions

use crate::utils::error::RbacError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role definition
///
/// Closed set of roles a caller can hold. Serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including user and settings management
    Admin,
    /// Works investigations, evidence and reports
    Analyst,
    /// Read-only access
    Viewer,
}

impl Role {
    /// Identifier of the admin role
    pub const ADMIN: &'static str = "admin";
    /// Identifier of the analyst role
    pub const ANALYST: &'static str = "analyst";
    /// Identifier of the viewer role
    pub const VIEWER: &'static str = "viewer";

    /// All roles, highest privilege first
    pub const fn all() -> &'static [Role] {
        &[Role::Admin, Role::Analyst, Role::Viewer]
    }

    /// Resolve a raw role string. Exact, case-sensitive match.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            Self::ADMIN => Some(Role::Admin),
            Self::ANALYST => Some(Role::Analyst),
            Self::VIEWER => Some(Role::Viewer),
            _ => None,
        }
    }

    /// Canonical identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => Self::ADMIN,
            Role::Analyst => Self::ANALYST,
            Role::Viewer => Self::VIEWER,
        }
    }

    /// Privilege rank; higher means more privileged
    pub const fn rank(&self) -> u8 {
        match self {
            Role::Admin => 2,
            Role::Analyst => 1,
            Role::Viewer => 0,
        }
    }

    /// Whether this role is at least as privileged as `other`
    pub const fn at_least(&self, other: Role) -> bool {
        self.rank() >= other.rank()
    }

    /// Human readable description
    pub const fn description(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator with full access",
            Role::Analyst => "Analyst working investigations and evidence",
            Role::Viewer => "Read-only access to investigations and reports",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| RbacError::parsing(format!("Invalid role: {}", s)))
    }
}

/// Permission definition
///
/// Closed set of `resource:action` capabilities. The string form is the
/// wire format and must match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Permission {
    InvestigationCreate,
    InvestigationRead,
    InvestigationUpdate,
    InvestigationDelete,
    EvidenceUpload,
    EvidenceRead,
    EvidenceDelete,
    ReportCreate,
    ReportRead,
    ReportExport,
    UserRead,
    UserManage,
    SettingsManage,
}

impl Permission {
    /// Separator between resource and action in the string form
    pub const SEPARATOR: char = ':';

    /// Every defined permission
    pub const fn all() -> &'static [Permission] {
        use Permission::*;
        &[
            InvestigationCreate,
            InvestigationRead,
            InvestigationUpdate,
            InvestigationDelete,
            EvidenceUpload,
            EvidenceRead,
            EvidenceDelete,
            ReportCreate,
            ReportRead,
            ReportExport,
            UserRead,
            UserManage,
            SettingsManage,
        ]
    }

    /// Canonical `resource:action` form
    pub const fn as_str(&self) -> &'static str {
        match self {
            Permission::InvestigationCreate => "investigation:create",
            Permission::InvestigationRead => "investigation:read",
            Permission::InvestigationUpdate => "investigation:update",
            Permission::InvestigationDelete => "investigation:delete",
            Permission::EvidenceUpload => "evidence:upload",
            Permission::EvidenceRead => "evidence:read",
            Permission::EvidenceDelete => "evidence:delete",
            Permission::ReportCreate => "report:create",
            Permission::ReportRead => "report:read",
            Permission::ReportExport => "report:export",
            Permission::UserRead => "user:read",
            Permission::UserManage => "user:manage",
            Permission::SettingsManage => "settings:manage",
        }
    }

    /// Resource tag
    pub fn resource(&self) -> &'static str {
        self.split().0
    }

    /// Action tag
    pub fn action(&self) -> &'static str {
        self.split().1
    }

    fn split(&self) -> (&'static str, &'static str) {
        let s = self.as_str();
        // every canonical form contains exactly one separator
        s.split_once(Self::SEPARATOR).unwrap_or((s, ""))
    }

    /// Resolve a `resource:action` string. Exact, case-sensitive match.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.as_str() == s)
    }

    /// Resolve a permission from its separate resource and action tags
    pub fn from_parts(resource: &str, action: &str) -> Option<Self> {
        Self::parse(&format!("{}{}{}", resource, Self::SEPARATOR, action))
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::parse(s).ok_or_else(|| RbacError::parsing(format!("Invalid permission: {}", s)))
    }
}

impl TryFrom<String> for Permission {
    type Error = RbacError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.as_str().to_string()
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Role the caller resolved to, if it resolved at all
    pub role: Option<Role>,
    /// Permission that was checked
    pub permission: Permission,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}

impl PermissionCheck {
    pub(super) fn granted(role: Role, permission: Permission) -> Self {
        Self {
            granted: true,
            role: Some(role),
            permission,
            denial_reason: None,
        }
    }

    pub(super) fn denied(role: Option<Role>, permission: Permission, reason: String) -> Self {
        Self {
            granted: false,
            role,
            permission,
            denial_reason: Some(reason),
        }
    }
}
