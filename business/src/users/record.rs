//! User record model and the seed data the store starts with.

use std::fmt;

pub type UserId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Role {
    #[default]
    Student,
    Admin,
}

impl Role {
    pub const ALL: [Self; 2] = [Self::Student, Self::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}

impl UserRecord {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        status: UserStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
            status,
        }
    }
}

/// The five accounts every session starts with.
pub fn seed_users() -> Vec<UserRecord> {
    use Role::{Admin, Student};
    use UserStatus::{Active, Inactive};

    vec![
        UserRecord::new(1, "John Doe", "john@example.com", Student, Active),
        UserRecord::new(2, "Jane Smith", "jane@example.com", Admin, Active),
        UserRecord::new(3, "Bob Johnson", "bob@example.com", Student, Inactive),
        UserRecord::new(4, "Alice Brown", "alice@example.com", Student, Active),
        UserRecord::new(5, "Charlie Wilson", "charlie@example.com", Admin, Active),
    ]
}
