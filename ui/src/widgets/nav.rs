//! Top bar navigation between the routed pages.

use egui::Ui;
use roster_business::Route;
use roster_states::StateCtx;

pub fn nav_bar(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let current = *state_ctx.state::<Route>();
    let mut selected = current;

    ui.strong("Roster");
    ui.separator();
    for route in Route::NAV {
        ui.selectable_value(&mut selected, route, route.path());
    }

    if selected != current {
        log::info!("Navigating to {}", selected.path());
        state_ctx.update::<Route>(|route| *route = selected);
    }
}
