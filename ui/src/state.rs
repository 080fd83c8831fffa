use roster_business::{RosterConfig, register_all};
use roster_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::new(RosterConfig::default())
    }
}

impl State {
    pub fn new(config: RosterConfig) -> Self {
        let mut ctx = StateCtx::new();
        register_all(&mut ctx, config);

        Self { ctx }
    }

    /// State for UI tests: no login delay.
    pub fn test() -> Self {
        Self::new(RosterConfig::new_for_test())
    }
}
