// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{EventExport, notify_export_success};
use crate::models::CalendarEvent;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export JSON pretty-printed, with typed figures (numbers stay numbers).
pub(crate) fn export_json(events: &[CalendarEvent], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let mut file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut file, events)?;
    file.write_all(b"\n")?;
    file.flush()?;

    notify_export_success("JSON", path, events.len());
    Ok(())
}

/// Export CSV (header row derived from the serde field names).
pub(crate) fn export_csv(events: &[CalendarEvent], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for e in events {
        wtr.serialize(EventExport::from(e))?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path, events.len());
    Ok(())
}
