//! Cell rendering for the users table.

use egui::{Color32, Frame, Margin, RichText, Ui};
use roster_business::users::{BadgeTone, CellContent, UserId};

use super::TableAction;

const PRIMARY: Color32 = Color32::from_rgb(7, 33, 75);
const SECONDARY: Color32 = Color32::from_rgb(226, 232, 240);
const DESTRUCTIVE: Color32 = Color32::from_rgb(220, 53, 69);

/// Fill, text and border colors for a badge.
fn tone_colors(tone: BadgeTone, ui: &Ui) -> (Color32, Color32, Color32) {
    match tone {
        BadgeTone::Primary => (PRIMARY, Color32::WHITE, PRIMARY),
        BadgeTone::Secondary => (SECONDARY, Color32::BLACK, SECONDARY),
        BadgeTone::Outline => {
            let text = ui.visuals().text_color();
            (Color32::TRANSPARENT, text, text)
        }
        BadgeTone::Destructive => (DESTRUCTIVE, Color32::WHITE, DESTRUCTIVE),
    }
}

#[inline]
pub fn render_badge(ui: &mut Ui, text: &str, tone: BadgeTone) {
    let (fill, fg, border) = tone_colors(tone, ui);
    Frame::NONE
        .fill(fill)
        .stroke((1.0, border))
        .corner_radius(8.0)
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(fg));
        });
}

#[inline]
fn render_row_actions(ui: &mut Ui, id: UserId) -> Option<TableAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button("Edit").clicked() {
            action = Some(TableAction::Edit(id));
        }
        if ui
            .button(RichText::new("Delete").color(DESTRUCTIVE))
            .clicked()
        {
            action = Some(TableAction::Delete(id));
        }
    });
    action
}

/// Renders one resolved cell, returning the row action it triggered.
#[inline]
pub fn render_cell(ui: &mut Ui, content: &CellContent) -> Option<TableAction> {
    match content {
        CellContent::Text(text) => {
            ui.label(text);
            None
        }
        CellContent::Badge { text, tone } => {
            render_badge(ui, text, *tone);
            None
        }
        CellContent::RowActions { id } => render_row_actions(ui, *id),
    }
}
