//! User management page: toolbar, table, pagination and the editor dialog.

use egui::{Response, Ui};

use crate::{state::State, widgets};

pub fn users_page(state: &mut State, ui: &mut Ui) -> Response {
    let response = ui
        .vertical(|ui| {
            widgets::users_toolbar(&mut state.ctx, ui);
            ui.add_space(8.0);
            widgets::users_table(&mut state.ctx, ui);
            ui.add_space(8.0);
            widgets::users_pagination(&mut state.ctx, ui);
        })
        .response;

    widgets::user_editor_dialog(&mut state.ctx, ui);

    response
}
