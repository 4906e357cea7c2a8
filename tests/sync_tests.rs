mod common;
use chrono::NaiveDate;
use common::{setup_dir, week_feb25, week_mar03};
use ffcal::config::PeriodMode;
use ffcal::core::{PeriodOutcome, SyncEngine, SyncSummary};
use ffcal::db::ledger::{PeriodLedger, SqliteLedger};
use ffcal::db::pool::DbPool;
use ffcal::errors::{AppError, AppResult};
use ffcal::fetcher::calendar_html::parse_rows;
use ffcal::fetcher::{FetchError, PageFetcher};
use ffcal::models::{FieldValue, Period, RawRow, RowField};
use ffcal::store::{EventStore, JsonStore};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// What the fake source answers for one page.
#[derive(Clone)]
enum Page {
    Rows(Vec<RawRow>),
    Timeout,
    Unavailable,
}

#[derive(Default)]
struct FakeFetcher {
    weeks: HashMap<String, Page>,
    days: HashMap<NaiveDate, Page>,
    calls: usize,
}

impl FakeFetcher {
    fn with_weeks() -> Self {
        let mut f = Self::default();
        f.week("2024-02-25", Page::Rows(parse_rows(&week_feb25()).unwrap()));
        f.week("2024-03-03", Page::Rows(parse_rows(&week_mar03()).unwrap()));
        f
    }

    fn week(&mut self, key: &str, page: Page) {
        self.weeks.insert(key.to_string(), page);
    }

    fn answer(page: Option<&Page>, label: String) -> Result<Vec<RawRow>, FetchError> {
        match page {
            Some(Page::Rows(rows)) => Ok(rows.clone()),
            Some(Page::Timeout) => Err(FetchError::Timeout(label)),
            Some(Page::Unavailable) => Err(FetchError::Unavailable(label)),
            None => Err(FetchError::NoContent(label)),
        }
    }
}

impl PageFetcher for FakeFetcher {
    fn fetch_period_rows(&mut self, period: &Period) -> Result<Vec<RawRow>, FetchError> {
        self.calls += 1;
        Self::answer(self.weeks.get(&period.key()), period.key())
    }

    fn fetch_day_rows(&mut self, day: NaiveDate) -> Result<Vec<RawRow>, FetchError> {
        self.calls += 1;
        Self::answer(self.days.get(&day), day.to_string())
    }
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn later() -> NaiveDate {
    d(2024, 6, 1)
}

fn store_at(name: &str) -> (JsonStore, PathBuf) {
    let dir = setup_dir(name);
    let path = dir.join("events.json");
    (JsonStore::new(&path), path)
}

fn run(
    fetcher: &mut FakeFetcher,
    store: &JsonStore,
    ledger: &mut SqliteLedger<'_>,
    today: NaiveDate,
) -> AppResult<SyncSummary> {
    SyncEngine::new(fetcher, store, ledger, PeriodMode::Week)
        .with_today(today)
        .sync(d(2024, 3, 1), 2)
}

#[test]
fn first_run_scrapes_merges_and_marks() {
    let (store, _) = store_at("sync_first_run");
    let pool = DbPool::in_memory().unwrap();
    let mut ledger = SqliteLedger::new(&pool);
    let mut fetcher = FakeFetcher::with_weeks();

    let summary = run(&mut fetcher, &store, &mut ledger, later()).unwrap();

    assert_eq!(summary.count(PeriodOutcome::Completed), 2);
    assert_eq!(summary.records_before, 0);
    assert_eq!(summary.records_after, 4);
    assert_eq!(summary.net_new(), 4);
    assert!(summary.store_written);
    assert!(ledger.is_complete("2024-02-25").unwrap());
    assert!(ledger.is_complete("2024-03-03").unwrap());
    assert_eq!(ledger.completed().unwrap()[0].records, 3);

    let events = store.load().events;
    let names: Vec<&str> = events.iter().map(|e| e.event.as_str()).collect();
    assert_eq!(
        names,
        vec!["Non-Farm Payrolls", "Unemployment Rate", "Bank Holiday", "ISM Services PMI"]
    );
    assert!(events[..3].iter().all(|e| e.date == d(2024, 3, 1)));
    assert_eq!(events[3].date, d(2024, 3, 5));
}

#[test]
fn second_run_is_a_no_op() {
    let (store, path) = store_at("sync_idempotent");
    let pool = DbPool::in_memory().unwrap();
    let mut ledger = SqliteLedger::new(&pool);
    let mut fetcher = FakeFetcher::with_weeks();

    run(&mut fetcher, &store, &mut ledger, later()).unwrap();
    let before = fs::read(&path).unwrap();
    let calls = fetcher.calls;

    let summary = run(&mut fetcher, &store, &mut ledger, later()).unwrap();

    assert_eq!(summary.count(PeriodOutcome::Skipped), 2);
    assert_eq!(summary.processed(), 0);
    assert!(!summary.store_written);
    assert_eq!(fetcher.calls, calls);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn nothing_pending_leaves_missing_store_missing() {
    let (store, path) = store_at("sync_nothing_pending");
    let pool = DbPool::in_memory().unwrap();
    let mut ledger = SqliteLedger::new(&pool);
    ledger.mark_complete("2024-02-25", 0).unwrap();
    ledger.mark_complete("2024-03-03", 0).unwrap();
    let mut fetcher = FakeFetcher::with_weeks();

    run(&mut fetcher, &store, &mut ledger, later()).unwrap();

    assert_eq!(fetcher.calls, 0);
    assert!(!path.exists());
}

#[test]
fn rescraping_an_open_week_updates_without_duplicates() {
    let (store, _) = store_at("sync_cross_run_dedup");
    let pool = DbPool::in_memory().unwrap();
    let mut ledger = SqliteLedger::new(&pool);
    let mut fetcher = FakeFetcher::with_weeks();

    // Thursday 7 March: the second week is still running.
    let first = run(&mut fetcher, &store, &mut ledger, d(2024, 3, 7)).unwrap();
    assert_eq!(first.count(PeriodOutcome::Completed), 1);
    assert_eq!(first.count(PeriodOutcome::Incomplete), 1);
    assert!(!ledger.is_complete("2024-03-03").unwrap());

    let mut rows = parse_rows(&week_mar03()).unwrap();
    rows[0].set(RowField::Actual, "54.1");
    fetcher.week("2024-03-03", Page::Rows(rows));

    let second = run(&mut fetcher, &store, &mut ledger, later()).unwrap();

    assert_eq!(second.count(PeriodOutcome::Skipped), 1);
    assert_eq!(second.count(PeriodOutcome::Completed), 1);
    assert_eq!(second.added, 0);
    assert_eq!(second.updated, 1);
    assert_eq!(second.records_after, 4);

    let events = store.load().events;
    let pmi = events.iter().find(|e| e.event == "ISM Services PMI").unwrap();
    assert_eq!(pmi.actual, Some(FieldValue::Number(54.1)));
}

#[test]
fn interrupted_run_resumes_without_duplicates() {
    let (store, _) = store_at("sync_resume");
    let pool = DbPool::in_memory().unwrap();
    let mut ledger = SqliteLedger::new(&pool);
    let mut fetcher = FakeFetcher::with_weeks();
    fetcher.week("2024-03-03", Page::Unavailable);

    let err = run(&mut fetcher, &store, &mut ledger, later()).unwrap_err();
    assert!(matches!(err, AppError::CollaboratorUnavailable(_)));
    assert!(ledger.is_complete("2024-02-25").unwrap());
    assert!(!ledger.is_complete("2024-03-03").unwrap());
    assert_eq!(store.load().events.len(), 3);

    fetcher.week("2024-03-03", Page::Rows(parse_rows(&week_mar03()).unwrap()));
    let summary = run(&mut fetcher, &store, &mut ledger, later()).unwrap();

    assert_eq!(summary.count(PeriodOutcome::Skipped), 1);
    assert_eq!(summary.count(PeriodOutcome::Completed), 1);
    assert_eq!(summary.records_after, 4);
}

#[test]
fn timed_out_week_stays_pending() {
    let (store, _) = store_at("sync_timeout");
    let pool = DbPool::in_memory().unwrap();
    let mut ledger = SqliteLedger::new(&pool);
    let mut fetcher = FakeFetcher::with_weeks();
    fetcher.week("2024-02-25", Page::Timeout);

    let summary = run(&mut fetcher, &store, &mut ledger, later()).unwrap();

    let report = &summary.periods[0];
    assert_eq!(report.period_key, "2024-02-25");
    assert_eq!(report.outcome, PeriodOutcome::Incomplete);
    assert_eq!(report.failed_units, 1);
    assert!(!ledger.is_complete("2024-02-25").unwrap());
    assert!(ledger.is_complete("2024-03-03").unwrap());
    assert_eq!(summary.records_after, 1);
}

#[test]
fn undatable_week_is_abandoned_and_the_run_goes_on() {
    let (store, _) = store_at("sync_abandon");
    let pool = DbPool::in_memory().unwrap();
    let mut ledger = SqliteLedger::new(&pool);
    let mut fetcher = FakeFetcher::with_weeks();
    let orphan = RawRow::normal()
        .with(RowField::Time, "8:30am")
        .with(RowField::Event, "Orphan");
    fetcher.week("2024-02-25", Page::Rows(vec![orphan]));

    let summary = run(&mut fetcher, &store, &mut ledger, later()).unwrap();

    assert_eq!(summary.periods[0].outcome, PeriodOutcome::Abandoned);
    assert_eq!(summary.periods[1].outcome, PeriodOutcome::Completed);
    assert!(!ledger.is_complete("2024-02-25").unwrap());
    let events = store.load().events;
    assert_eq!(events.len(), 1);
    assert!(events.iter().all(|e| e.event != "Orphan"));
}

#[test]
fn corrupt_store_is_rebuilt() {
    let (store, path) = store_at("sync_corrupt");
    fs::write(&path, "this is not json").unwrap();
    let pool = DbPool::in_memory().unwrap();
    let mut ledger = SqliteLedger::new(&pool);
    let mut fetcher = FakeFetcher::with_weeks();

    let summary = run(&mut fetcher, &store, &mut ledger, later()).unwrap();

    assert!(summary.store_corrupt);
    assert_eq!(summary.records_before, 0);
    let reloaded = store.load();
    assert!(!reloaded.corrupt);
    assert_eq!(reloaded.events.len(), 4);
}

#[test]
fn duplicated_history_is_cleaned_once() {
    let (store, _) = store_at("sync_history_dedup");
    let pool = DbPool::in_memory().unwrap();
    let mut ledger = SqliteLedger::new(&pool);
    let mut fetcher = FakeFetcher::with_weeks();
    run(&mut fetcher, &store, &mut ledger, later()).unwrap();

    let mut doubled = store.load().events;
    doubled.extend(doubled.clone());
    store.save(&doubled).unwrap();

    let pool2 = DbPool::in_memory().unwrap();
    let mut fresh_ledger = SqliteLedger::new(&pool2);
    let summary = run(&mut fetcher, &store, &mut fresh_ledger, later()).unwrap();

    assert_eq!(summary.records_before, 4);
    assert_eq!(summary.added, 0);
    assert_eq!(store.load().events.len(), 4);
}

#[test]
fn day_mode_seeds_each_page_with_its_day() {
    let (store, _) = store_at("sync_day_mode");
    let pool = DbPool::in_memory().unwrap();
    let mut ledger = SqliteLedger::new(&pool);
    let mut fetcher = FakeFetcher::default();
    let period = Period::containing(d(2024, 3, 4));
    for day in period.days() {
        let row = RawRow::normal()
            .with(RowField::Time, "9:00am")
            .with(RowField::Currency, "JPY")
            .with(RowField::Event, format!("Daily {}", day));
        fetcher.days.insert(day, Page::Rows(vec![row]));
    }

    let summary = SyncEngine::new(&mut fetcher, &store, &mut ledger, PeriodMode::Day)
        .with_today(later())
        .sync(d(2024, 3, 4), 1)
        .unwrap();

    assert_eq!(fetcher.calls, 7);
    assert_eq!(summary.periods[0].outcome, PeriodOutcome::Completed);
    let events = store.load().events;
    assert_eq!(events.len(), 7);
    for (event, day) in events.iter().zip(period.days()) {
        assert_eq!(event.date, day);
        assert_eq!(event.period_key, "2024-03-03");
    }
}
