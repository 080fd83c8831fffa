mod editor;
mod pagination;
pub mod table;
mod toolbar;

pub use editor::user_editor_dialog;
pub use pagination::users_pagination;
pub use table::{TableAction, users_table};
pub use toolbar::users_toolbar;
