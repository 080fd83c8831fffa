//! Heading, search box, column picker and the "Add New User" button.

use egui::{Align, Layout, TextEdit, Ui};
use roster_business::users::{Column, OpenUserEditorCommand, UserEditorTarget, UsersViewState};
use roster_states::StateCtx;

const SEARCH_WIDTH: f32 = 280.0;

pub fn users_toolbar(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let view = state_ctx.state::<UsersViewState>().0.clone();
    let mut next = view.clone();
    let mut open_create = false;

    ui.horizontal(|ui| {
        ui.heading("User Management");
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("Add New User").clicked() {
                open_create = true;
            }
        });
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let mut search = view.filter(Column::Name).to_owned();
        let response = ui.add(
            TextEdit::singleline(&mut search)
                .hint_text("Search by name...")
                .desired_width(SEARCH_WIDTH),
        );
        if response.changed() {
            next = next.with_filter(Column::Name, search);
        }

        if !view.filters().is_empty() && ui.button("Clear filters").clicked() {
            next = next.clear_filters();
        }

        ui.menu_button("Columns", |ui| {
            for column in Column::ALL {
                let mut visible = view.is_visible(column);
                if ui.checkbox(&mut visible, column.label()).changed() {
                    next = next.with_column_visible(column, visible);
                }
            }
        });
    });

    if next != view {
        state_ctx.update::<UsersViewState>(|state| state.0 = next);
    }

    if open_create {
        state_ctx.update::<UserEditorTarget>(|target| target.id = None);
        state_ctx.dispatch::<OpenUserEditorCommand>();
    }
}
