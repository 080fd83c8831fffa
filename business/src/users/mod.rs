mod columns;
mod commands;
mod editor;
mod projection;
mod record;
mod store;
mod view_state;

pub use columns::{
    BadgeTone, CellContent, CellRenderer, ColumnDef, ColumnRenderer, HeaderContent, HeaderCtx,
    HeaderRenderer, default_columns, role_tone, status_tone,
};
pub use commands::{
    CloseUserEditorCommand, DeleteUserCommand, DeleteUserInput, OpenUserEditorCommand,
    SaveUserCommand, UserEditorTarget,
};
pub use editor::{DraftField, DraftRecord, FormEditor, FormMode, ValidationErrors};
pub use projection::{ProjectedRow, Projection, UsersTableCompute, project, project_with};
pub use record::{Role, UserId, UserRecord, UserStatus, seed_users};
pub use store::{RecordStore, StoreError};
pub use view_state::{Column, SortDirection, SortKey, UsersViewState, ViewState};
