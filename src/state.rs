use std::fmt;
use std::time::{Duration, Instant};

use chrono::{NaiveDate, NaiveDateTime};
use image::DynamicImage;
use rand::Rng;

use crate::apod::client::ApodSource;
use crate::apod::date::{format_date, sample_date};
use crate::apod::error::FetchError;
use crate::apod::model::ApodRecord;
use crate::config::Config;
use crate::imaging;
use crate::timer::RefreshTimer;

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

/// The picture currently on screen.
#[derive(Debug, Clone)]
pub struct DisplayedImage {
    pub date: NaiveDate,
    pub title: String,
    /// Already fitted into the display box.
    pub image: DynamicImage,
    /// Bumped on every successful load so the UI knows to re-upload.
    pub generation: u64,
}

/// State of the secondary "Information" window.
#[derive(Debug, Clone, PartialEq)]
pub enum InfoPanel {
    Closed,
    /// `record` is `None` when fetching the details failed.
    Open {
        date: NaiveDate,
        record: Option<ApodRecord>,
    },
}

/// Errors surfaced to the user as a message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoImageLoaded,
    InfoFetchFailed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoImageLoaded => write!(f, "No image loaded yet"),
            Notice::InfoFetchFailed => write!(f, "Failed to fetch information"),
        }
    }
}

/// Result of one load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Displayed(NaiveDate),
    /// Updates are paused while the info panel is open; nothing happened.
    Paused,
    /// Every attempt failed; the screen is unchanged.
    Exhausted { attempts: u32 },
}

#[derive(Debug, Clone)]
struct RetryPolicy {
    max_attempts: u32,
    retry_delay: Duration,
    exhausted_backoff: Duration,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The viewer controller, independent of rendering.
pub struct AppState {
    /// Picture on screen (None until the first successful load).
    pub displayed: Option<DisplayedImage>,

    /// True while the info panel is open.
    pub update_paused: bool,

    pub info_panel: InfoPanel,

    pub timer: RefreshTimer,

    /// Message box waiting to be shown.
    notice: Option<Notice>,

    retry: RetryPolicy,
    image_bounds: (u32, u32),
    generation: u64,
}

impl AppState {
    pub fn new(config: &Config, now: Instant) -> Self {
        Self {
            displayed: None,
            update_paused: false,
            info_panel: InfoPanel::Closed,
            timer: RefreshTimer::new(config.refresh_interval, now),
            notice: None,
            retry: RetryPolicy {
                max_attempts: config.max_attempts.max(1),
                retry_delay: config.retry_delay,
                exhausted_backoff: config.exhausted_backoff,
            },
            image_bounds: config.image_bounds,
            generation: 0,
        }
    }

    /// Date of the picture on screen, set only by a successful load.
    pub fn current_date(&self) -> Option<NaiveDate> {
        self.displayed.as_ref().map(|d| d.date)
    }

    /// Heading above the picture.
    pub fn title_text(&self) -> Option<String> {
        self.displayed
            .as_ref()
            .map(|d| format!("Learn about: {}", d.title))
    }

    /// Whether the Info / Next buttons accept clicks.
    pub fn controls_enabled(&self) -> bool {
        !self.update_paused
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    // -- Loader --

    /// Show a random archive picture, trying new dates until one works or
    /// the attempt budget runs out.
    pub fn load_image_and_info<R: Rng + ?Sized>(
        &mut self,
        source: &dyn ApodSource,
        rng: &mut R,
        wall_now: NaiveDateTime,
    ) -> LoadOutcome {
        if self.update_paused {
            log::debug!("Updates paused, skipping load");
            return LoadOutcome::Paused;
        }

        let max = self.retry.max_attempts;
        for attempt in 1..=max {
            let date = sample_date(rng, wall_now);
            match fetch_displayable(source, date, self.image_bounds) {
                Ok((record, image)) => {
                    log::info!(
                        "Showing {} '{}' ({}x{})",
                        format_date(date),
                        record.title,
                        image.width(),
                        image.height()
                    );
                    self.generation += 1;
                    self.displayed = Some(DisplayedImage {
                        date,
                        title: record.title,
                        image,
                        generation: self.generation,
                    });
                    return LoadOutcome::Displayed(date);
                }
                Err(e) => {
                    log::warn!("Attempt {attempt}/{max} for {}: {e}", format_date(date));
                    if attempt < max && !self.retry.retry_delay.is_zero() {
                        std::thread::sleep(self.retry.retry_delay);
                    }
                }
            }
        }

        log::error!("No displayable picture after {max} attempts");
        LoadOutcome::Exhausted { attempts: max }
    }

    /// Run one load cycle; after an exhausted cycle try again soon rather
    /// than waiting a full interval.
    pub fn run_cycle<R: Rng + ?Sized>(
        &mut self,
        source: &dyn ApodSource,
        rng: &mut R,
        wall_now: NaiveDateTime,
        now: Instant,
    ) -> LoadOutcome {
        let outcome = self.load_image_and_info(source, rng, wall_now);
        if let LoadOutcome::Exhausted { .. } = outcome {
            self.timer.reset_after(now, self.retry.exhausted_backoff);
        }
        outcome
    }

    /// Timer tick: load when the refresh deadline has passed.
    pub fn refresh<R: Rng + ?Sized>(
        &mut self,
        source: &dyn ApodSource,
        rng: &mut R,
        wall_now: NaiveDateTime,
        now: Instant,
    ) -> Option<LoadOutcome> {
        if !self.timer.poll(now) {
            return None;
        }
        log::debug!("Refresh timer fired");
        Some(self.run_cycle(source, rng, wall_now, now))
    }

    // -- Info panel --

    /// Open the info panel for the picture on screen, fetching its details
    /// again.
    pub fn open_info(&mut self, source: &dyn ApodSource) {
        let Some(date) = self.current_date() else {
            self.notice = Some(Notice::NoImageLoaded);
            return;
        };

        self.update_paused = true;
        let record = match source.fetch_record(date) {
            Ok(record) => Some(record),
            Err(e) => {
                log::error!("Info for {}: {e}", format_date(date));
                self.notice = Some(Notice::InfoFetchFailed);
                None
            }
        };
        self.info_panel = InfoPanel::Open { date, record };
    }

    /// Close the info panel, resume updates and restart the refresh
    /// countdown.
    pub fn close_info(&mut self, now: Instant) {
        self.info_panel = InfoPanel::Closed;
        self.update_paused = false;
        self.timer.reset(now);
        log::debug!(
            "Info panel closed, next refresh in {:?}",
            self.timer.interval()
        );
    }
}

/// Metadata, image bytes, decode and fit for a single date.
fn fetch_displayable(
    source: &dyn ApodSource,
    date: NaiveDate,
    (max_w, max_h): (u32, u32),
) -> Result<(ApodRecord, DynamicImage), FetchError> {
    let record = source.fetch_record(date)?;
    if !record.is_image() {
        return Err(FetchError::NotAnImage {
            media_type: record.media_type.to_string(),
        });
    }
    let bytes = source.fetch_image(&record.url)?;
    let image = imaging::decode(&bytes)?;
    Ok((record, imaging::fit_within(&image, max_w, max_h)))
}
