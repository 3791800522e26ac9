mod apod;
mod app;
mod config;
mod imaging;
mod state;
mod timer;
mod ui;

use app::ApodViewerApp;
use apod::client::ApodClient;
use config::Config;
use eframe::egui;

const WINDOW_TITLE: &str = "NASA Photo of the Day";

fn main() -> eframe::Result {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e:#}");
            std::process::exit(2);
        }
    };
    let client = match ApodClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("{e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([800.0, 480.0])
            .with_fullscreen(true),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(ApodViewerApp::new(cc, Box::new(client), &config)))),
    )
}
