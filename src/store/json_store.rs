use super::{EventStore, StoreLoad};
use crate::errors::AppResult;
use crate::models::CalendarEvent;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Events kept as one pretty-printed JSON array.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl EventStore for JsonStore {
    fn load(&self) -> StoreLoad {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No store at {}, starting empty", self.path.display());
                return StoreLoad::default();
            }
            Err(e) => {
                warn!("Cannot read store {}: {e}; treating it as empty", self.path.display());
                return StoreLoad {
                    events: Vec::new(),
                    corrupt: true,
                };
            }
        };

        match serde_json::from_str::<Vec<CalendarEvent>>(&content) {
            Ok(events) => StoreLoad {
                events,
                corrupt: false,
            },
            Err(e) => {
                warn!(
                    "Store {} is malformed ({e}); treating it as empty",
                    self.path.display()
                );
                StoreLoad {
                    events: Vec::new(),
                    corrupt: true,
                }
            }
        }
    }

    /// Write to a temporary file next to the store, then rename it over the
    /// store, so a crash never leaves a half-written file behind.
    fn save(&self, events: &[CalendarEvent]) -> AppResult<()> {
        let dir = self.dir();
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, events)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!("Saved {} events to {}", events.len(), self.path.display());
        Ok(())
    }
}
