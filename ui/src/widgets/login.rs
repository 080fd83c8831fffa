//! Login widget.
//!
//! Displays a centered card with identifier and password inputs. While a
//! login is in flight the inputs are locked and the button reads
//! "Logging in...".

use egui::{Align, Button, Color32, Frame, Layout, Margin, Response, RichText, TextEdit, Ui};
use roster_business::{AuthCompute, AuthStatus, LoginCommand, LoginInput, Route};
use roster_states::StateCtx;

/// Prussian blue, used for the card border and labels
const COLOR_ACCENT: Color32 = Color32::from_rgb(7, 33, 75);
/// Ivory card background
const COLOR_CARD: Color32 = Color32::from_rgb(252, 252, 237);
/// Red color for error status
const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

const FORM_WIDTH: f32 = 360.0;

/// Displays the login form.
pub fn login_widget(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let auth_status = state_ctx
        .cached::<AuthCompute>()
        .map(|c| c.status.clone())
        .unwrap_or_default();
    let is_loading = auth_status.is_authenticating();

    let input = state_ctx.state::<LoginInput>();
    let mut identifier = input.identifier.clone();
    let mut password = input.password.clone();
    let mut should_login = false;
    let mut go_register = false;

    let response = ui
        .with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(40.0);

            Frame::NONE
                .fill(COLOR_CARD)
                .stroke((1.0, COLOR_ACCENT))
                .corner_radius(8.0)
                .inner_margin(Margin::same(24))
                .show(ui, |ui| {
                    ui.set_width(FORM_WIDTH);
                    ui.vertical_centered(|ui| {
                        ui.heading(RichText::new("Welcome back").strong().color(COLOR_ACCENT));
                        ui.label("Enter your email or username and password to log in");
                    });
                    ui.add_space(16.0);

                    ui.label(RichText::new("Email or Username").strong().color(COLOR_ACCENT));
                    ui.add_enabled(
                        !is_loading,
                        TextEdit::singleline(&mut identifier)
                            .hint_text("john@example.com or john_doe")
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(8.0);

                    ui.label(RichText::new("Password").strong().color(COLOR_ACCENT));
                    let password_response = ui.add_enabled(
                        !is_loading,
                        TextEdit::singleline(&mut password)
                            .password(true)
                            .hint_text("••••••••")
                            .desired_width(f32::INFINITY),
                    );
                    if password_response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                    {
                        should_login = true;
                    }

                    if let AuthStatus::Failed(error) = &auth_status {
                        ui.add_space(8.0);
                        Frame::NONE
                            .stroke((1.0, COLOR_RED))
                            .corner_radius(4.0)
                            .inner_margin(Margin::same(8))
                            .show(ui, |ui| {
                                ui.colored_label(COLOR_RED, error);
                            });
                    }

                    ui.add_space(16.0);
                    let label = if is_loading { "Logging in..." } else { "Login" };
                    if ui
                        .add_enabled(
                            !is_loading,
                            Button::new(label).min_size(egui::vec2(FORM_WIDTH, 32.0)),
                        )
                        .clicked()
                    {
                        should_login = true;
                    }

                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        ui.label("Don't have an account?");
                        if ui.link("Sign up").clicked() {
                            go_register = true;
                        }
                    });
                });
        })
        .response;

    // Update state if values changed
    let input = state_ctx.state::<LoginInput>();
    if input.identifier != identifier || input.password != password {
        state_ctx.update::<LoginInput>(|input| {
            input.identifier = identifier;
            input.password = password;
        });
    }

    if should_login && !is_loading {
        state_ctx.dispatch::<LoginCommand>();
    }

    if go_register {
        state_ctx.update::<Route>(|route| *route = Route::Register);
    }

    response
}
