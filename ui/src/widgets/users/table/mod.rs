//! Table components for user management.
//!
//! This module contains the table rendering logic split into smaller,
//! focused components:
//! - `columns`: Column widths
//! - `header`: Header rendering, including the sort toggle
//! - `row`: Individual row rendering
//! - `cells`: Text, badge and row action cells
//!
//! The table only draws what `UsersTableCompute` resolved. Clicks are
//! collected as [`TableAction`]s and applied after the table is drawn.

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use roster_business::users::{
    Column, DeleteUserCommand, DeleteUserInput, OpenUserEditorCommand, UserEditorTarget, UserId,
    UsersTableCompute, UsersViewState,
};
use roster_states::StateCtx;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_column};
use header::render_table_header;
use row::render_user_row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    ToggleSort { column: Column, multi: bool },
    Edit(UserId),
    Delete(UserId),
}

/// Draws the current page of users.
pub fn users_table(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(table) = state_ctx.cached::<UsersTableCompute>() else {
        return;
    };
    let projection = &table.projection;
    let mut actions = Vec::new();

    if projection.headers().is_empty() {
        ui.label("No columns selected.");
        return;
    }

    let mut builder = TableBuilder::new(ui)
        .id_salt("users_table")
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for (column, _) in projection.headers() {
        builder = builder.column(table_column(*column));
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header, projection.headers(), &mut actions);
        })
        .body(|mut body| {
            for data in projection.rows() {
                body.row(ROW_HEIGHT, |mut row| {
                    render_user_row(&mut row, data, &mut actions);
                });
            }
        });

    if projection.rows().is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label("No users found.");
        });
    }

    for action in actions {
        apply(state_ctx, action);
    }
}

fn apply(state_ctx: &mut StateCtx, action: TableAction) {
    match action {
        TableAction::ToggleSort { column, multi } => {
            state_ctx.update::<UsersViewState>(|state| {
                state.0 = if multi {
                    state.0.toggle_sort_multi(column)
                } else {
                    state.0.toggle_sort(column)
                };
            });
        }
        TableAction::Edit(id) => {
            state_ctx.update::<UserEditorTarget>(|target| target.id = Some(id));
            state_ctx.dispatch::<OpenUserEditorCommand>();
        }
        TableAction::Delete(id) => {
            state_ctx.update::<DeleteUserInput>(|input| input.id = Some(id));
            state_ctx.dispatch::<DeleteUserCommand>();
        }
    }
}
