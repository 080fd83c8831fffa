//! Route state for page navigation.
//!
//! This module defines the route enum that determines which page to display.

use roster_states::State;
use serde::{Deserialize, Serialize};

/// Represents the current page/route of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Login page, the landing page
    #[default]
    Login,
    /// User management table
    Users,
    /// Target of the "Sign up" link; registration itself does not exist
    Register,
}

impl Route {
    pub const NAV: [Self; 2] = [Self::Login, Self::Users];

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Users => "/admin/users",
            Self::Register => "/register",
        }
    }
}

impl State for Route {}
