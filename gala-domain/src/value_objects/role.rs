// Role value object

use serde::{Deserialize, Serialize};

/// User role. The `None` variant exists because the persisted ordinal 2
/// denotes an account without an assigned role; it never grants access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    RegularUser,
    None,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::RegularUser => "Regular User",
            Role::None => "None",
        }
    }

    /// Stable ordinal used by the record codec.
    pub fn ordinal(&self) -> u32 {
        match self {
            Role::Admin => 0,
            Role::RegularUser => 1,
            Role::None => 2,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(Role::Admin),
            1 => Some(Role::RegularUser),
            2 => Some(Role::None),
            _ => None,
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "regular user" | "regularuser" | "user" => Role::RegularUser,
            _ => Role::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_stable() {
        for role in [Role::Admin, Role::RegularUser, Role::None] {
            assert_eq!(Role::from_ordinal(role.ordinal()), Some(role));
        }
        assert_eq!(Role::from_ordinal(3), None);
    }

    #[test]
    fn parses_role_names() {
        assert_eq!(Role::from("Admin"), Role::Admin);
        assert_eq!(Role::from("regular user"), Role::RegularUser);
        assert_eq!(Role::from("gibberish"), Role::None);
    }
}
