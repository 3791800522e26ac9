use eframe::egui::{self, ScrollArea, TextEdit, Ui};

use crate::apod::date::format_date;
use crate::apod::model::ApodRecord;
use crate::state::InfoPanel;

// ---------------------------------------------------------------------------
// Information window
// ---------------------------------------------------------------------------

/// Show the info panel as its own OS window (or an embedded window when the
/// backend has no multi-viewport support).
///
/// Returns `true` once the user asked to close it.
pub fn info_viewport(ctx: &egui::Context, panel: &InfoPanel) -> bool {
    let InfoPanel::Open { date, record } = panel else {
        return false;
    };
    let text = record.as_ref().map(ApodRecord::info_text);

    ctx.show_viewport_immediate(
        egui::ViewportId::from_hash_of("info_panel"),
        egui::ViewportBuilder::default()
            .with_title(format!("Information – {}", format_date(*date)))
            .with_inner_size([600.0, 400.0]),
        |ctx, class| {
            if matches!(class, egui::ViewportClass::Embedded) {
                let mut open = true;
                let mut close = false;
                egui::Window::new("Information")
                    .open(&mut open)
                    .default_size([600.0, 400.0])
                    .show(ctx, |ui: &mut Ui| close = info_body(ui, text.as_deref()));
                return close || !open;
            }

            let mut close = false;
            egui::CentralPanel::default().show(ctx, |ui: &mut Ui| {
                close = info_body(ui, text.as_deref());
            });
            close || ctx.input(|i| i.viewport().close_requested())
        },
    )
}

fn info_body(ui: &mut Ui, text: Option<&str>) -> bool {
    let footer = ui.spacing().interact_size.y + 16.0;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .max_height((ui.available_height() - footer).max(0.0))
        .show(ui, |ui: &mut Ui| match text {
            Some(text) => {
                // `&str` is a read-only text buffer.
                let mut text = text;
                ui.add(
                    TextEdit::multiline(&mut text)
                        .desired_width(f32::INFINITY)
                        .frame(false),
                );
            }
            None => {
                ui.label("Information unavailable.");
            }
        });

    ui.separator();
    ui.button("Close").clicked()
}
