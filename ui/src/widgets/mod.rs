mod login;
mod nav;
mod toasts;
pub mod users;

pub use login::login_widget;
pub use nav::nav_bar;
pub use toasts::toasts;
pub use users::{user_editor_dialog, users_pagination, users_table, users_toolbar};
