// src/export/logic.rs

use crate::core::filter::EventFilter;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::CalendarEvent;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the stored events matching `filter` to `file`.
    pub fn export(
        events: &[CalendarEvent],
        format: ExportFormat,
        file: &Path,
        filter: &EventFilter,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(file, force)?;

        let selected: Vec<CalendarEvent> = events
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();

        if selected.is_empty() {
            warning("No events found for the selected filters.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&selected, file)?,
            ExportFormat::Json => export_json(&selected, file)?,
        }

        Ok(selected.len())
    }
}
