use std::time::Duration;

use kittest::{NodeT as _, Queryable};
use roster_business::{
    AuthCompute, AuthStatus, INVALID_CREDENTIALS_MESSAGE, LoginCommand, LoginInput, Route,
    RosterConfig,
};

use crate::common::TestCtx;

mod common;

/// Frames needed for a click to dispatch and its result to render.
const UI_PROPAGATION_FRAMES: usize = 3;

/// Tests that the login form is displayed with all expected elements.
#[tokio::test]
async fn test_login_form_displayed() {
    let mut ctx = TestCtx::new_app();

    let harness = ctx.harness_mut();
    harness.step();

    assert!(
        harness.query_by_label_contains("Welcome back").is_some(),
        "Welcome back heading should be displayed"
    );
    assert!(
        harness.query_by_label_contains("Email or Username").is_some(),
        "Email or Username label should be displayed"
    );
    assert!(
        harness.query_by_label("Password").is_some(),
        "Password label should be displayed"
    );
    assert!(
        harness.query_by_label("Login").is_some(),
        "Login button should be displayed"
    );
    assert!(
        harness.query_by_label("Sign up").is_some(),
        "Sign up link should be displayed"
    );
}

/// Submitting an empty form reports the missing identifier without a backend call.
#[tokio::test]
async fn test_login_with_empty_fields_shows_error() {
    let mut ctx = TestCtx::new_app();

    let harness = ctx.harness_mut();
    harness.step();

    harness.get_by_label("Login").click();
    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }

    assert!(
        harness
            .query_by_label_contains("Email or Username is required")
            .is_some(),
        "Missing identifier error should be displayed"
    );
    let status = &harness
        .state()
        .state()
        .ctx
        .compute::<AuthCompute>()
        .status;
    assert_eq!(
        *status,
        AuthStatus::Failed("Email or Username is required".to_owned())
    );
}

/// A missing password is reported once the identifier is filled in.
#[tokio::test]
async fn test_login_with_missing_password_shows_error() {
    let mut ctx = TestCtx::new_app();

    let harness = ctx.harness_mut();
    harness
        .state_mut()
        .state_mut()
        .ctx
        .update::<LoginInput>(|input| input.identifier = "john_doe".to_owned());
    harness.step();

    harness.state_mut().state_mut().ctx.dispatch::<LoginCommand>();
    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }

    assert!(
        harness
            .query_by_label_contains("Password is required")
            .is_some(),
        "Missing password error should be displayed"
    );
}

/// The sign up link switches to the registration page.
#[tokio::test]
async fn test_sign_up_link_navigates_to_register() {
    let mut ctx = TestCtx::new_app();

    let harness = ctx.harness_mut();
    harness.step();

    harness.get_by_label("Sign up").click();
    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }

    assert_eq!(
        *harness.state().state().ctx.state::<Route>(),
        Route::Register
    );
    assert!(
        harness.query_by_label("Back to login").is_some(),
        "Register page should offer a way back"
    );
}

/// While the simulated request is in flight the submit button is locked,
/// then the rejection shows inline and the form unlocks.
#[tokio::test(start_paused = true)]
async fn test_login_in_flight_then_rejected() {
    let delay = Duration::from_millis(2000);
    let mut ctx = TestCtx::new_app_with(RosterConfig::new_for_test().with_login_delay(delay));

    let harness = ctx.harness_mut();
    harness
        .state_mut()
        .state_mut()
        .ctx
        .update::<LoginInput>(|input| {
            input.identifier = "john@example.com".to_owned();
            input.password = "hunter2".to_owned();
        });
    harness.step();

    harness.get_by_label("Login").click();
    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }

    assert!(
        harness
            .state()
            .state()
            .ctx
            .compute::<AuthCompute>()
            .status
            .is_authenticating(),
        "Login should be in flight"
    );
    assert!(
        harness.get_by_label("Logging in...").accesskit_node().is_disabled(),
        "Submit should be disabled while loading"
    );
    assert!(
        harness.query_by_label("Login").is_none(),
        "Login label should be replaced while loading"
    );

    tokio::time::sleep(delay + Duration::from_millis(50)).await;
    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }

    assert!(
        harness
            .query_by_label_contains(INVALID_CREDENTIALS_MESSAGE)
            .is_some(),
        "Rejection should be shown inline"
    );
    assert!(
        !harness.get_by_label("Login").accesskit_node().is_disabled(),
        "Login should be enabled again"
    );
    assert!(
        harness.query_by_label("Logging in...").is_none(),
        "Loading label should be gone"
    );
}
