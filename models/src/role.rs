//! User roles and their permission levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseEnumError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Viewer,
    Marketing,
    Branding,
    #[serde(rename = "soc_level_1")]
    SocLevel1,
    #[serde(rename = "soc_level_3")]
    SocLevel3,
    Ciso,
    Admin,
    SuperAdmin,
}

impl UserRole {
    /// Every role, lowest permission level first.
    pub const ALL: [UserRole; 8] = [
        Self::Viewer,
        Self::Marketing,
        Self::Branding,
        Self::SocLevel1,
        Self::SocLevel3,
        Self::Ciso,
        Self::Admin,
        Self::SuperAdmin,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Marketing => "marketing",
            Self::Branding => "branding",
            Self::SocLevel1 => "soc_level_1",
            Self::SocLevel3 => "soc_level_3",
            Self::Ciso => "ciso",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Viewer => "Viewer",
            Self::Marketing => "Marketing",
            Self::Branding => "Branding",
            Self::SocLevel1 => "SOC Level 1",
            Self::SocLevel3 => "SOC Level 3",
            Self::Ciso => "CISO",
            Self::Admin => "Admin",
            Self::SuperAdmin => "Super Admin",
        }
    }

    /// Display-only ordering; authorization is enforced by the backend.
    #[must_use]
    pub fn permission_level(self) -> u8 {
        match self {
            Self::Viewer => 1,
            Self::Marketing => 2,
            Self::Branding => 3,
            Self::SocLevel1 => 4,
            Self::SocLevel3 => 5,
            Self::Ciso => 6,
            Self::Admin => 7,
            Self::SuperAdmin => 8,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("role", s))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: UserRole,
}

#[cfg(test)]
#[path = "role_test.rs"]
mod tests;
