use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use eframe::egui::{self, Color32, Key, TextureHandle, ViewportCommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::apod::client::ApodSource;
use crate::apod::date::{apod_page_url, local_now};
use crate::config::Config;
use crate::imaging;
use crate::state::AppState;
use crate::ui::panels::ControlAction;
use crate::ui::{dialogs, info, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ApodViewerApp {
    pub state: AppState,
    source: Box<dyn ApodSource>,
    rng: StdRng,
    /// GPU copy of `state.displayed`, tagged with its generation.
    texture: Option<(u64, TextureHandle)>,
    fullscreen: bool,
}

impl ApodViewerApp {
    /// Set up the window theme and show the first picture before the event
    /// loop starts.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        source: Box<dyn ApodSource>,
        config: &Config,
    ) -> Self {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = Color32::WHITE;
        cc.egui_ctx.set_visuals(visuals);

        let now = Instant::now();
        let mut app = Self {
            state: AppState::new(config, now),
            source,
            rng: StdRng::from_entropy(),
            texture: None,
            fullscreen: true,
        };
        app.state
            .run_cycle(app.source.as_ref(), &mut app.rng, local_now(), now);
        app
    }

    /// Upload the displayed picture if it changed since the last frame.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let Some(shown) = &self.state.displayed else {
            return;
        };
        if matches!(&self.texture, Some((generation, _)) if *generation == shown.generation) {
            return;
        }
        let handle = ctx.load_texture(
            "apod_picture",
            imaging::to_color_image(&shown.image),
            egui::TextureOptions::LINEAR,
        );
        self.texture = Some((shown.generation, handle));
    }
}

impl eframe::App for ApodViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Timer ----
        self.state
            .refresh(self.source.as_ref(), &mut self.rng, local_now(), Instant::now());

        if ctx.input(|i| i.key_pressed(Key::F11)) {
            self.fullscreen = !self.fullscreen;
            ctx.send_viewport_cmd(ViewportCommand::Fullscreen(self.fullscreen));
        }

        self.sync_texture(ctx);

        // ---- Top panel: title ----
        let mut title_clicked = false;
        egui::TopBottomPanel::top("title_bar")
            .show_separator_line(false)
            .show(ctx, |ui| {
                title_clicked = panels::title_bar(ui, &self.state);
            });

        // ---- Bottom panel: Info / Next ----
        let mut action = ControlAction::None;
        egui::TopBottomPanel::bottom("control_bar")
            .show_separator_line(false)
            .show(ctx, |ui| {
                action = panels::control_bar(ui, &self.state);
            });

        // ---- Central panel: picture ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::picture(ui, self.texture.as_ref().map(|(_, tex)| tex));
        });

        if title_clicked {
            if let Some(date) = self.state.current_date() {
                if let Err(e) = open_apod_page(date) {
                    log::error!("Failed to open browser: {e:#}");
                }
            }
        }

        match action {
            ControlAction::Info => self.state.open_info(self.source.as_ref()),
            ControlAction::Next => {
                self.state
                    .run_cycle(self.source.as_ref(), &mut self.rng, local_now(), Instant::now());
            }
            ControlAction::None => {}
        }

        // ---- Secondary window: information ----
        if info::info_viewport(ctx, &self.state.info_panel) {
            self.state.close_info(Instant::now());
        }

        if let Some(notice) = self.state.take_notice() {
            dialogs::show_error(notice);
        }

        ctx.request_repaint_after(self.state.timer.remaining(Instant::now()));
    }
}

fn open_apod_page(date: NaiveDate) -> Result<()> {
    let url = apod_page_url(date);
    webbrowser::open(&url).with_context(|| format!("opening {url}"))?;
    log::info!("Opened {url}");
    Ok(())
}
