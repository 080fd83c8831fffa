//! Previous/Next controls under the table.

use egui::{Align, Layout, Ui};
use roster_business::users::{UsersTableCompute, UsersViewState};
use roster_states::StateCtx;

pub fn users_pagination(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(table) = state_ctx.cached::<UsersTableCompute>() else {
        return;
    };
    let projection = &table.projection;
    let page = projection.page();
    let mut target: Option<usize> = None;

    ui.horizontal(|ui| {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui
                .add_enabled(projection.can_go_next(), egui::Button::new("Next"))
                .clicked()
            {
                target = Some(page + 1);
            }
            if ui
                .add_enabled(projection.can_go_previous(), egui::Button::new("Previous"))
                .clicked()
            {
                target = Some(page.saturating_sub(1));
            }
            ui.label(format!(
                "Page {} of {} ({} users)",
                page + 1,
                projection.page_count(),
                projection.filtered_len()
            ));
        });
    });

    if let Some(page) = target {
        state_ctx.update::<UsersViewState>(|state| state.0 = state.0.with_page(page));
    }
}
