//! Domain states, computes and commands for the roster app.
//!
//! Everything here is UI-agnostic: the egui layer only writes input states,
//! dispatches commands and reads computes.

mod config;
mod login_state;
mod notifications;
mod route;
pub mod users;

use roster_states::{StateCtx, Time};

pub use config::{DEFAULT_LOGIN_DELAY_MS, DEFAULT_PAGE_SIZE, DEFAULT_TOAST_SECONDS, RosterConfig};
pub use login_state::{
    AuthBackend, AuthCompute, AuthError, AuthStatus, Authenticator, Credentials,
    INVALID_CREDENTIALS_MESSAGE, LoginCommand, LoginInput, SimulatedAuthenticator,
};
pub use notifications::{
    DismissToastCommand, DismissToastInput, NotificationQueue, Toast, ToastId, ToastKind,
    VisibleToasts,
};
pub use route::Route;

use users::{
    CloseUserEditorCommand, DeleteUserCommand, DeleteUserInput, FormEditor, OpenUserEditorCommand,
    RecordStore, SaveUserCommand, UserEditorTarget, UsersTableCompute, UsersViewState,
};

/// Registers every state, compute and command of the app.
///
/// The store starts from the seed records and the login uses the simulated
/// backend with `config`'s delay.
pub fn register_all(ctx: &mut StateCtx, config: RosterConfig) {
    ctx.add_state(Time::default());
    ctx.add_state(Route::default());
    ctx.add_state(AuthBackend::simulated(config.login_delay()));
    ctx.add_state(NotificationQueue::new(config.toast_duration()));
    ctx.add_state(config);

    ctx.add_state(RecordStore::seeded());
    ctx.add_state(UsersViewState::default());
    ctx.add_state(FormEditor::default());
    ctx.add_state(UserEditorTarget::default());
    ctx.add_state(DeleteUserInput::default());
    ctx.add_state(DismissToastInput::default());
    ctx.add_state(LoginInput::default());

    ctx.record_compute(UsersTableCompute::default());
    ctx.record_compute(VisibleToasts::default());
    ctx.record_compute(AuthCompute::default());

    ctx.record_command(OpenUserEditorCommand);
    ctx.record_command(SaveUserCommand);
    ctx.record_command(CloseUserEditorCommand);
    ctx.record_command(DeleteUserCommand);
    ctx.record_command(DismissToastCommand);
    ctx.record_command(LoginCommand);
}
