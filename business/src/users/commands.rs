//! Commands behind the users page buttons.
//!
//! Each command reads its input state, then sends whole replacement values
//! through the [`Updater`]. Updates from one dispatch are applied in send
//! order, so a save lands in the store before its toast, and the toast
//! before the editor closes.

use log::{info, warn};
use roster_states::{Command, Dep, State, Time, Updater};

use super::editor::{FormEditor, FormMode};
use super::projection::project;
use super::record::UserId;
use super::store::{RecordStore, StoreError};
use super::view_state::UsersViewState;
use crate::config::RosterConfig;
use crate::notifications::{NotificationQueue, ToastKind};

/// Which record `OpenUserEditorCommand` opens; `None` means "create".
#[derive(Debug, Clone, Default)]
pub struct UserEditorTarget {
    pub id: Option<UserId>,
}

impl State for UserEditorTarget {}

/// Which record `DeleteUserCommand` removes.
#[derive(Debug, Clone, Default)]
pub struct DeleteUserInput {
    pub id: Option<UserId>,
}

impl State for DeleteUserInput {}

fn toast(deps: Dep<'_>, updater: &Updater, message: String, kind: ToastKind) {
    let now = deps.get_state_ref::<Time>().now();
    let queue = deps.get_state_ref::<NotificationQueue>();
    updater.set(queue.with_toast(message, kind, now));
}

/// Publishes a mutated store, pulling the view's page back to the last
/// page the store still fills.
fn commit_store(deps: Dep<'_>, updater: &Updater, store: RecordStore) {
    let view = &deps.get_state_ref::<UsersViewState>().0;
    let page_size = deps.get_state_ref::<RosterConfig>().page_size();
    let page = project(store.list(), view, page_size).page();

    updater.set(store);
    if page != view.current_page() {
        updater.set(UsersViewState(view.with_page(page)));
    }
}

/// Opens the editor dialog, seeded from the target record in edit mode.
///
/// Opening a record that no longer exists leaves the editor closed and
/// raises an error toast instead.
#[derive(Debug, Default)]
pub struct OpenUserEditorCommand;

impl Command for OpenUserEditorCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let target = deps.get_state_ref::<UserEditorTarget>();
        let store = deps.get_state_ref::<RecordStore>();

        let Some(id) = target.id else {
            info!("OpenUserEditorCommand: creating a new user");
            updater.set(FormEditor::open_create());
            return;
        };

        match store.get(id) {
            Some(record) => {
                info!("OpenUserEditorCommand: editing user #{id}");
                updater.set(FormEditor::open_edit(record));
            }
            None => {
                let err = StoreError::NotFound { id };
                warn!("OpenUserEditorCommand: {err}");
                toast(deps, &updater, err.to_string(), ToastKind::Error);
            }
        }
    }
}

/// Validates the draft and commits it to the store.
///
/// ## Flow
///
/// 1. Invalid draft: stays open with field errors, nothing else changes.
/// 2. Editor goes to `Saving`.
/// 3. Create or update in the store.
/// 4. Success or error toast.
/// 5. Editor closes and the draft is dropped.
#[derive(Debug, Default)]
pub struct SaveUserCommand;

impl Command for SaveUserCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let editor = deps.get_state_ref::<FormEditor>();

        let target = match editor.mode() {
            FormMode::OpenCreate => None,
            FormMode::OpenEdit(id) => Some(id),
            FormMode::Closed | FormMode::Saving => {
                warn!("SaveUserCommand: editor is not open ({:?})", editor.mode());
                return;
            }
        };

        let draft = editor.draft();
        if let Err(errors) = draft.validate() {
            info!("SaveUserCommand: draft rejected: {errors}");
            updater.set(editor.with_errors(errors));
            return;
        }

        updater.set(editor.saving());

        let mut store = deps.get_state_ref::<RecordStore>().clone();
        let saved = match target {
            None => store.create(draft).map(|record| (record, "created")),
            Some(id) => store.update(id, draft).map(|record| (record, "updated")),
        };

        match saved {
            Ok((record, verb)) => {
                info!("SaveUserCommand: {verb} user #{}", record.id);
                commit_store(deps, &updater, store);
                toast(
                    deps,
                    &updater,
                    format!("{} has been {verb}.", record.name),
                    ToastKind::Success,
                );
            }
            Err(err) => {
                warn!("SaveUserCommand: {err}");
                toast(deps, &updater, err.to_string(), ToastKind::Error);
            }
        }

        updater.set(FormEditor::default());
    }
}

/// Discards the draft.
#[derive(Debug, Default)]
pub struct CloseUserEditorCommand;

impl Command for CloseUserEditorCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        if deps.get_state_ref::<FormEditor>().is_open() {
            info!("CloseUserEditorCommand: draft discarded");
            updater.set(FormEditor::default());
        }
    }
}

#[derive(Debug, Default)]
pub struct DeleteUserCommand;

impl Command for DeleteUserCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let Some(id) = deps.get_state_ref::<DeleteUserInput>().id else {
            warn!("DeleteUserCommand: no user selected");
            return;
        };

        let mut store = deps.get_state_ref::<RecordStore>().clone();
        match store.delete(id) {
            Ok(removed) => {
                info!("DeleteUserCommand: deleted user #{id}");
                commit_store(deps, &updater, store);
                toast(
                    deps,
                    &updater,
                    format!("{} has been deleted.", removed.name),
                    ToastKind::Success,
                );
            }
            Err(err) => {
                warn!("DeleteUserCommand: {err}");
                toast(deps, &updater, err.to_string(), ToastKind::Error);
            }
        }
    }
}
