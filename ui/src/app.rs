use std::time::Duration;

use roster_business::{AuthCompute, Route, VisibleToasts};
use roster_states::Time;

use crate::{pages, state::State, widgets};

/// How often to repaint while something time-based (toasts, login) is live.
const TICK: Duration = Duration::from_millis(250);

pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply results from background tasks, then derive for render
        self.state.ctx.update::<Time>(|time| *time = Time::default());
        self.state.ctx.run_computed();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                widgets::nav_bar(&mut self.state.ctx, ui);
            });
        });

        let route = *self.state.ctx.state::<Route>();
        egui::CentralPanel::default().show(ctx, |ui| {
            match route {
                Route::Login => pages::login_page(&mut self.state, ui),
                Route::Users => pages::users_page(&mut self.state, ui),
                Route::Register => pages::register_page(&mut self.state, ui),
            };
        });

        widgets::toasts(&mut self.state.ctx, ctx);

        // Pick up anything the widgets wrote this frame
        self.state.ctx.run_computed();

        let ticking = self
            .state
            .ctx
            .cached::<AuthCompute>()
            .is_some_and(AuthCompute::is_authenticating)
            || self
                .state
                .ctx
                .cached::<VisibleToasts>()
                .is_some_and(|visible| !visible.toasts.is_empty());
        if ticking {
            ctx.request_repaint_after(TICK);
        }
    }
}
