use egui_kittest::Harness;
use roster_business::RosterConfig;
use roster_ui::RosterApp;
use roster_ui::state::State;

pub struct TestCtx<'a, T = State> {
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }
}

impl<'a> TestCtx<'a, State> {
    #[allow(unused)]
    pub fn new(mut app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        let harness = Harness::new_ui_state(
            move |ui, state: &mut State| {
                state.ctx.run_computed();
                app(ui, state);
                state.ctx.run_computed();
            },
            State::test(),
        );

        Self { harness }
    }
}

impl<'a> TestCtx<'a, RosterApp> {
    #[allow(unused)]
    pub fn new_app() -> Self {
        Self::new_app_with(RosterConfig::new_for_test())
    }

    #[allow(unused)]
    pub fn new_app_with(config: RosterConfig) -> Self {
        let app = RosterApp::new(State::new(config));
        let harness = Harness::new_eframe(|_| app);

        Self { harness }
    }
}
