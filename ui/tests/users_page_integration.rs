use kittest::Queryable;
use roster_business::users::{
    Column, DeleteUserCommand, DeleteUserInput, FormEditor, FormMode, RecordStore,
    UsersViewState,
};
use roster_ui::{pages, widgets};

use crate::common::TestCtx;

mod common;

const UI_PROPAGATION_FRAMES: usize = 3;

fn users_page_ctx<'a>() -> TestCtx<'a> {
    TestCtx::new(|ui, state| {
        pages::users_page(state, ui);
        widgets::toasts(&mut state.ctx, ui.ctx());
    })
}

/// Tests that the page shows the toolbar and the seeded users count.
#[tokio::test]
async fn test_users_page_displayed() {
    let mut ctx = users_page_ctx();

    let harness = ctx.harness_mut();
    harness.step();

    assert!(
        harness.query_by_label("User Management").is_some(),
        "User Management heading should be displayed"
    );
    assert!(
        harness.query_by_label("Add New User").is_some(),
        "Add New User button should be displayed"
    );
    assert!(
        harness
            .query_by_label_contains("Page 1 of 1 (5 users)")
            .is_some(),
        "Pagination summary should count the seeded users"
    );
    assert!(
        harness.query_by_label("Alice Brown").is_some(),
        "Seeded rows should be rendered"
    );
}

/// Clicking "Add New User" opens an empty editor in create mode.
#[tokio::test]
async fn test_add_new_user_opens_editor() {
    let mut ctx = users_page_ctx();

    let harness = ctx.harness_mut();
    harness.step();

    harness.get_by_label("Add New User").click();
    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }

    let editor = harness.state().ctx.state::<FormEditor>();
    assert_eq!(editor.mode(), FormMode::OpenCreate);
    assert!(editor.draft().name.is_empty(), "Draft should start empty");
    assert!(
        harness
            .query_by_label_contains("Create a new user account.")
            .is_some(),
        "Create description should be displayed"
    );
}

/// A filter with no matches leaves an empty page and a placeholder.
#[tokio::test]
async fn test_filter_without_matches_shows_placeholder() {
    let mut ctx = users_page_ctx();

    let harness = ctx.harness_mut();
    harness
        .state_mut()
        .ctx
        .update::<UsersViewState>(|state| state.0 = state.0.with_filter(Column::Name, "zzz"));
    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }

    assert!(
        harness.query_by_label_contains("No users found.").is_some(),
        "Empty placeholder should be displayed"
    );
    assert!(
        harness
            .query_by_label_contains("Page 1 of 1 (0 users)")
            .is_some(),
        "Pagination should still report one page"
    );
}

/// Deleting a user updates the count and raises a toast.
#[tokio::test]
async fn test_delete_user_updates_page_and_toasts() {
    let mut ctx = users_page_ctx();

    let harness = ctx.harness_mut();
    harness.step();

    {
        let state = harness.state_mut();
        state.ctx.update::<DeleteUserInput>(|input| input.id = Some(1));
        state.ctx.dispatch::<DeleteUserCommand>();
    }
    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }

    assert_eq!(harness.state().ctx.state::<RecordStore>().len(), 4);
    assert!(
        harness
            .query_by_label_contains("Page 1 of 1 (4 users)")
            .is_some(),
        "Pagination should count the remaining users"
    );
    assert!(
        harness
            .query_by_label_contains("John Doe has been deleted.")
            .is_some(),
        "Deletion toast should be displayed"
    );
}
