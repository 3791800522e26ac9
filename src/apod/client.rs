use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::Url;

use super::date::format_date;
use super::error::FetchError;
use super::model::ApodRecord;
use crate::config::Config;

// ---------------------------------------------------------------------------
// ApodSource – the seam between the controller and the network
// ---------------------------------------------------------------------------

/// Anything that can hand out APOD metadata and image bytes.
pub trait ApodSource {
    /// Metadata for the entry published on `date`.
    fn fetch_record(&self, date: NaiveDate) -> Result<ApodRecord, FetchError>;

    /// Raw encoded bytes behind an image URL.
    fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

// ---------------------------------------------------------------------------
// HTTP implementation
// ---------------------------------------------------------------------------

pub struct ApodClient {
    http: HttpClient,
    api_key: String,
    api_url: Url,
}

impl ApodClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.http_timeout)
            .user_agent(concat!("apod-viewer/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building HTTP client")?;

        Ok(ApodClient {
            http,
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
        })
    }

    /// Metadata URL for a given day, including the API key.
    pub fn record_url(&self, date: NaiveDate) -> Url {
        let mut url = self.api_url.clone();
        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .append_pair("date", &format_date(date));
        url
    }
}

impl ApodSource for ApodClient {
    fn fetch_record(&self, date: NaiveDate) -> Result<ApodRecord, FetchError> {
        let response = self.http.get(self.record_url(date)).send()?;
        // Never echo the full URL, it carries the key.
        let response = ensure_success(response, || {
            format!("{}?date={}", self.api_url, format_date(date))
        })?;
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.http.get(url).send()?;
        let response = ensure_success(response, || url.to_string())?;
        Ok(response.bytes()?.to_vec())
    }
}

fn ensure_success(
    response: Response,
    describe: impl FnOnce() -> String,
) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::Status {
            status: status.as_u16(),
            url: describe(),
        })
    }
}
