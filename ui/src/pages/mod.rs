//! Pages module for the application.
//!
//! This module contains the different pages that can be displayed based on the route:
//! - `login_page`: Login form
//! - `users_page`: User management table
//! - `register_page`: Placeholder behind the "Sign up" link

mod login_page;
mod register_page;
mod users_page;

pub use login_page::login_page;
pub use register_page::register_page;
pub use users_page::users_page;
