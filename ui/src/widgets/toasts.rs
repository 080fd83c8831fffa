//! Toast overlay in the bottom-right corner.

use egui::{Align2, Color32, Context, Frame, Id, Margin, RichText};
use roster_business::{DismissToastCommand, DismissToastInput, ToastId, ToastKind, VisibleToasts};
use roster_states::StateCtx;

const SUCCESS_BG: Color32 = Color32::from_rgb(220, 252, 231);
const SUCCESS_FG: Color32 = Color32::from_rgb(22, 101, 52);
const ERROR_BG: Color32 = Color32::from_rgb(254, 226, 226);
const ERROR_FG: Color32 = Color32::from_rgb(153, 27, 27);

fn colors(kind: ToastKind) -> (Color32, Color32) {
    match kind {
        ToastKind::Success => (SUCCESS_BG, SUCCESS_FG),
        ToastKind::Error => (ERROR_BG, ERROR_FG),
    }
}

/// Draws every visible toast, oldest on top.
pub fn toasts(state_ctx: &mut StateCtx, ctx: &Context) {
    let Some(visible) = state_ctx.cached::<VisibleToasts>() else {
        return;
    };
    if visible.toasts.is_empty() {
        return;
    }

    let mut dismissed: Option<ToastId> = None;

    egui::Area::new(Id::new("toasts"))
        .anchor(Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .show(ctx, |ui| {
            for toast in &visible.toasts {
                let (bg, fg) = colors(toast.kind);
                Frame::NONE
                    .fill(bg)
                    .stroke((1.0, fg))
                    .corner_radius(6.0)
                    .inner_margin(Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&toast.message).color(fg));
                            if ui.small_button("✕").on_hover_text("Dismiss").clicked() {
                                dismissed = Some(toast.id);
                            }
                        });
                    });
                ui.add_space(4.0);
            }
        });

    if let Some(id) = dismissed {
        state_ctx.update::<DismissToastInput>(|input| input.id = Some(id));
        state_ctx.dispatch::<DismissToastCommand>();
    }
}
