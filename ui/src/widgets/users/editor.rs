//! Create/edit user dialog.

use egui::{Color32, ComboBox, Grid, TextEdit, Ui, Window};
use roster_business::users::{
    CloseUserEditorCommand, DraftField, FormEditor, Role, SaveUserCommand, UserStatus,
};
use roster_states::StateCtx;

const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Shows the dialog while the editor is open.
pub fn user_editor_dialog(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let editor = state_ctx.state::<FormEditor>();
    if !editor.is_open() {
        return;
    }

    let description = if editor.is_editing() {
        "Make changes to the user account."
    } else {
        "Create a new user account."
    };
    let title = editor.title();
    let errors = editor.errors().clone();
    let mut draft = editor.draft().clone();

    let mut open = true;
    let mut save = false;
    let mut cancel = false;

    Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label(description);
            ui.add_space(8.0);

            Grid::new("user_editor_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Name");
                    ui.add(TextEdit::singleline(&mut draft.name).desired_width(220.0));
                    ui.end_row();
                    if let Some(message) = errors.get(DraftField::Name) {
                        ui.label("");
                        ui.colored_label(COLOR_RED, message);
                        ui.end_row();
                    }

                    ui.label("Email");
                    ui.add(TextEdit::singleline(&mut draft.email).desired_width(220.0));
                    ui.end_row();
                    if let Some(message) = errors.get(DraftField::Email) {
                        ui.label("");
                        ui.colored_label(COLOR_RED, message);
                        ui.end_row();
                    }

                    ui.label("Role");
                    ComboBox::from_id_salt("user_editor_role")
                        .selected_text(draft.role.as_str())
                        .show_ui(ui, |ui| {
                            for role in Role::ALL {
                                ui.selectable_value(&mut draft.role, role, role.as_str());
                            }
                        });
                    ui.end_row();

                    ui.label("Status");
                    ComboBox::from_id_salt("user_editor_status")
                        .selected_text(draft.status.as_str())
                        .show_ui(ui, |ui| {
                            for status in UserStatus::ALL {
                                ui.selectable_value(&mut draft.status, status, status.as_str());
                            }
                        });
                    ui.end_row();
                });

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    save = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if state_ctx.state::<FormEditor>().draft() != &draft {
        state_ctx.update::<FormEditor>(|editor| *editor.draft_mut() = draft);
    }

    if save {
        state_ctx.dispatch::<SaveUserCommand>();
    } else if cancel || !open {
        state_ctx.dispatch::<CloseUserEditorCommand>();
    }
}
