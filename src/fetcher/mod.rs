//! Page retrieval. The scraper only sees the [`PageFetcher`] trait; `http`
//! talks to the live calendar and `snapshot` replays saved pages.

pub mod calendar_html;
pub mod http;
pub mod snapshot;

use crate::config::{Config, SourceKind};
use crate::errors::AppResult;
use crate::models::{Period, RawRow};
use chrono::NaiveDate;
use thiserror::Error;

pub use http::HttpFetcher;
pub use snapshot::SnapshotFetcher;

/// Conditions a page source reports instead of rows.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The page did not arrive within the configured bound.
    #[error("timed out loading {0}")]
    Timeout(String),

    /// The page arrived but holds no calendar table (or does not exist).
    #[error("no calendar content at {0}")]
    NoContent(String),

    /// The source itself cannot be used; the run cannot continue.
    #[error("page source unavailable: {0}")]
    Unavailable(String),
}

/// Source of calendar rows, one page at a time.
///
/// Calls are sequential: implementations may hold a session.
pub trait PageFetcher {
    /// Rows of the whole week starting at `period`.
    fn fetch_period_rows(&mut self, period: &Period) -> Result<Vec<RawRow>, FetchError>;

    /// Rows of a single day.
    fn fetch_day_rows(&mut self, day: NaiveDate) -> Result<Vec<RawRow>, FetchError>;
}

/// Build the fetcher selected in the configuration.
pub fn from_config(cfg: &Config) -> AppResult<Box<dyn PageFetcher>> {
    match cfg.source {
        SourceKind::Http => Ok(Box::new(HttpFetcher::new(cfg)?)),
        SourceKind::Snapshot => Ok(Box::new(SnapshotFetcher::new(&cfg.snapshot_dir)?)),
    }
}
