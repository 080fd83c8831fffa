//! Row rendering for the users table.

use egui::Stroke;
use egui_extras::TableRow;
use roster_business::users::ProjectedRow;

use super::TableAction;
use super::cells::render_cell;

/// Renders every cell of one projected row.
#[inline]
pub fn render_user_row(
    row: &mut TableRow<'_, '_>,
    data: &ProjectedRow,
    actions: &mut Vec<TableAction>,
) {
    for cell in &data.cells {
        row.col(|ui| {
            if let Some(action) = render_cell(ui, cell) {
                actions.push(action);
            }
            draw_cell_bottom_border(ui);
        });
    }
}

/// Thin separator under each cell.
#[inline]
fn draw_cell_bottom_border(ui: &egui::Ui) {
    let rect = ui.max_rect();
    let color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter()
        .hline(rect.x_range(), rect.bottom(), Stroke::new(1.0, color));
}
