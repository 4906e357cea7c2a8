//! Persisted event store and the merge rules applied to it.

pub mod json_store;

use crate::errors::AppResult;
use crate::models::{CalendarEvent, EventKey};
use std::collections::HashMap;
use std::collections::HashSet;

pub use json_store::JsonStore;

/// Contents read at the start of a run.
#[derive(Debug, Default)]
pub struct StoreLoad {
    pub events: Vec<CalendarEvent>,
    /// The stored data could not be read and was replaced by an empty set.
    pub corrupt: bool,
}

/// Whole-collection persistence: read everything, write everything.
pub trait EventStore {
    fn load(&self) -> StoreLoad;
    fn save(&self, events: &[CalendarEvent]) -> AppResult<()>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    pub added: usize,
    pub updated: usize,
}

/// Remove records whose identity key was already seen; the first one stays.
pub fn dedup(events: Vec<CalendarEvent>) -> Vec<CalendarEvent> {
    let mut seen: HashSet<EventKey> = HashSet::with_capacity(events.len());
    events.into_iter().filter(|e| seen.insert(e.key())).collect()
}

/// Merge freshly scraped records into a deduplicated store.
///
/// A record whose key is already stored replaces the stored values (later
/// scrapes carry released actuals); other records are appended. The store
/// ends up ordered by date and time.
pub fn merge(store: &mut Vec<CalendarEvent>, fresh: Vec<CalendarEvent>) -> MergeStats {
    let mut index: HashMap<EventKey, usize> = store
        .iter()
        .enumerate()
        .map(|(i, e)| (e.key(), i))
        .collect();
    let mut stats = MergeStats::default();

    for event in fresh {
        match index.get(&event.key()) {
            Some(&i) => {
                if store[i] != event {
                    store[i] = event;
                    stats.updated += 1;
                }
            }
            None => {
                index.insert(event.key(), store.len());
                store.push(event);
                stats.added += 1;
            }
        }
    }

    store.sort_by(|a, b| a.date.cmp(&b.date).then(a.time.cmp(&b.time)));
    stats
}
