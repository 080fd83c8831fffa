//! Column widths for the users table.

use roster_business::users::Column;

pub const ROW_HEIGHT: f32 = 32.0;
pub const HEADER_HEIGHT: f32 = 28.0;

const ROLE_WIDTH: f32 = 100.0;
const STATUS_WIDTH: f32 = 100.0;
const ACTIONS_WIDTH: f32 = 130.0;

/// Layout for one table column. Name and Email share whatever is left.
#[inline]
pub fn table_column(column: Column) -> egui_extras::Column {
    match column {
        Column::Name => egui_extras::Column::remainder().at_least(120.0),
        Column::Email => egui_extras::Column::remainder().at_least(160.0),
        Column::Role => egui_extras::Column::exact(ROLE_WIDTH),
        Column::Status => egui_extras::Column::exact(STATUS_WIDTH),
        Column::Actions => egui_extras::Column::exact(ACTIONS_WIDTH),
    }
}
