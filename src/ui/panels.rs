use eframe::egui::{self, Align, Button, Layout, RichText, TextureHandle, Ui};

use crate::state::AppState;

/// What the user clicked in the control bar this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    None,
    Info,
    Next,
}

// ---------------------------------------------------------------------------
// Title bar
// ---------------------------------------------------------------------------

/// Render the heading. Returns `true` when it was clicked.
pub fn title_bar(ui: &mut Ui, state: &AppState) -> bool {
    let mut clicked = false;
    ui.add_space(20.0);
    ui.vertical_centered(|ui: &mut Ui| {
        let Some(title) = state.title_text() else {
            ui.label(RichText::new("NASA Photo of the Day").size(20.0).strong());
            return;
        };
        let heading = egui::Label::new(RichText::new(title).size(20.0).strong())
            .sense(egui::Sense::click());
        clicked = ui
            .add(heading)
            .on_hover_text("Open this day on apod.nasa.gov")
            .clicked();
    });
    ui.add_space(20.0);
    clicked
}

// ---------------------------------------------------------------------------
// Central picture
// ---------------------------------------------------------------------------

pub fn picture(ui: &mut Ui, texture: Option<&TextureHandle>) {
    ui.centered_and_justified(|ui: &mut Ui| match texture {
        Some(tex) => {
            ui.image((tex.id(), tex.size_vec2()));
        }
        None => {
            ui.heading("Searching the archive…");
        }
    });
}

// ---------------------------------------------------------------------------
// Control bar
// ---------------------------------------------------------------------------

/// Info on the left, Next on the right; both disabled while paused.
pub fn control_bar(ui: &mut Ui, state: &AppState) -> ControlAction {
    let enabled = state.controls_enabled();
    let mut action = ControlAction::None;

    ui.add_space(10.0);
    ui.horizontal(|ui: &mut Ui| {
        ui.add_space(10.0);
        if ui.add_enabled(enabled, Button::new("Info")).clicked() {
            action = ControlAction::Info;
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
            ui.add_space(10.0);
            if ui.add_enabled(enabled, Button::new("Next")).clicked() {
                action = ControlAction::Next;
            }
        });
    });
    ui.add_space(10.0);

    action
}
