//! Table header rendering for the users table.

use egui::{Button, Ui};
use egui_extras::TableRow;
use roster_business::users::{Column, HeaderContent, SortDirection};

use super::TableAction;

/// Renders the resolved header of every visible column.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    headers: &[(Column, HeaderContent)],
    actions: &mut Vec<TableAction>,
) {
    for (column, content) in headers {
        header.col(|ui| {
            if let Some(action) = render_header_cell(ui, *column, content) {
                actions.push(action);
            }
        });
    }
}

fn render_header_cell(ui: &mut Ui, column: Column, content: &HeaderContent) -> Option<TableAction> {
    match content {
        HeaderContent::Label(label) => {
            ui.strong(label);
            None
        }
        HeaderContent::SortToggle { label, direction } => {
            let arrow = direction.map_or("↕", SortDirection::arrow);
            let clicked = ui
                .add(Button::new(format!("{label} {arrow}")).frame(false))
                .on_hover_text("Click to sort, Shift+click to add to the sort")
                .clicked();
            clicked.then(|| TableAction::ToggleSort {
                column,
                multi: ui.input(|i| i.modifiers.shift),
            })
        }
    }
}
