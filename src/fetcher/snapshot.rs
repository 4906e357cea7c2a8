//! Saved calendar pages read from a directory.
//!
//! Files are named `week-YYYY-MM-DD.html` (the Sunday starting the week) and
//! `day-YYYY-MM-DD.html`.

use super::{FetchError, PageFetcher, calendar_html};
use crate::errors::{AppError, AppResult};
use crate::models::{Period, RawRow};
use chrono::NaiveDate;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct SnapshotFetcher {
    dir: PathBuf,
}

impl SnapshotFetcher {
    pub fn new(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(AppError::CollaboratorUnavailable(format!(
                "snapshot directory not found: {}",
                dir.display()
            )));
        }
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn week_file(&self, period: &Period) -> PathBuf {
        self.dir.join(format!("week-{}.html", period.key()))
    }

    pub fn day_file(&self, day: NaiveDate) -> PathBuf {
        self.dir.join(format!("day-{}.html", day.format("%Y-%m-%d")))
    }

    fn read_rows(&self, path: &Path) -> Result<Vec<RawRow>, FetchError> {
        let html = match fs::read_to_string(path) {
            Ok(html) => html,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FetchError::NoContent(path.display().to_string()));
            }
            Err(e) => {
                return Err(FetchError::Unavailable(format!("{}: {e}", path.display())));
            }
        };

        calendar_html::parse_rows(&html)
            .ok_or_else(|| FetchError::NoContent(path.display().to_string()))
    }
}

impl PageFetcher for SnapshotFetcher {
    fn fetch_period_rows(&mut self, period: &Period) -> Result<Vec<RawRow>, FetchError> {
        let path = self.week_file(period);
        self.read_rows(&path)
    }

    fn fetch_day_rows(&mut self, day: NaiveDate) -> Result<Vec<RawRow>, FetchError> {
        let path = self.day_file(day);
        self.read_rows(&path)
    }
}
