//! Where the "Sign up" link lands. Registration is not implemented.

use egui::{Align, Layout, Response, Ui};
use roster_business::Route;

use crate::state::State;

pub fn register_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space(40.0);
        ui.heading("Sign up");
        ui.add_space(8.0);
        ui.label("Registration is not available yet.");
        ui.add_space(16.0);

        if ui.link("Back to login").clicked() {
            state.ctx.update::<Route>(|route| *route = Route::Login);
        }
    })
    .response
}
