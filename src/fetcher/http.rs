//! Live calendar pages over HTTP.

use super::{FetchError, PageFetcher, calendar_html};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Period, RawRow};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::header::COOKIE;
use std::time::Duration;
use tracing::debug;

pub struct HttpFetcher {
    client: Client,
    base_url: String,
    timezone_cookie: String,
}

impl HttpFetcher {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| AppError::CollaboratorUnavailable(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            timezone_cookie: format!("fftimezone={}", urlencoding::encode(&cfg.timezone)),
        })
    }

    pub fn week_url(&self, period: &Period) -> String {
        format!("{}?week={}", self.base_url, url_token(period.start()))
    }

    pub fn day_url(&self, day: NaiveDate) -> String {
        format!("{}?day={}", self.base_url, url_token(day))
    }

    fn get_rows(&self, url: &str) -> Result<Vec<RawRow>, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(COOKIE, &self.timezone_cookie)
            .send()
            .map_err(|e| classify(url, e))?;

        if !response.status().is_success() {
            debug!("{} returned {}", url, response.status());
            return Err(FetchError::NoContent(url.to_string()));
        }

        let body = response.text().map_err(|e| classify(url, e))?;
        calendar_html::parse_rows(&body).ok_or_else(|| FetchError::NoContent(url.to_string()))
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_period_rows(&mut self, period: &Period) -> Result<Vec<RawRow>, FetchError> {
        let url = self.week_url(period);
        self.get_rows(&url)
    }

    fn fetch_day_rows(&mut self, day: NaiveDate) -> Result<Vec<RawRow>, FetchError> {
        let url = self.day_url(day);
        self.get_rows(&url)
    }
}

/// Calendar query token, e.g. `mar3.2024`.
pub fn url_token(date: NaiveDate) -> String {
    date.format("%b%-d.%Y").to_string().to_lowercase()
}

fn classify(url: &str, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(url.to_string())
    } else if e.is_connect() || e.is_builder() {
        FetchError::Unavailable(format!("{url}: {e}"))
    } else {
        FetchError::NoContent(format!("{url}: {e}"))
    }
}
