use chrono::{NaiveDate, NaiveTime};
use ffcal::core::date_resolver::resolve;
use ffcal::core::row_parser::parse;
use ffcal::core::{DateState, ParsedRow};
use ffcal::errors::AppError;
use ffcal::models::{CalendarEvent, FieldValue, Impact, RawRow, RowField, RowKind, TimeValue};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn row(date: &str, time: &str, event: &str) -> RawRow {
    RawRow::normal()
        .with(RowField::Date, date)
        .with(RowField::Time, time)
        .with(RowField::Currency, "USD")
        .with(RowField::Impact, "High Impact Expected")
        .with(RowField::Event, event)
}

fn event(parsed: ParsedRow) -> CalendarEvent {
    match parsed {
        ParsedRow::Event(e) => e,
        ParsedRow::Skipped => panic!("row was skipped"),
    }
}

#[test]
fn non_farm_payrolls_row() {
    let raw = row("Fri\nMar 1", "8:30am", "Non-Farm Payrolls")
        .with(RowField::Actual, "175K")
        .with(RowField::Forecast, "180K")
        .with(RowField::Previous, "150K");
    let mut state = DateState::new();

    let e = event(parse(&raw, "2024-02-25", 2024, &mut state).unwrap());

    assert_eq!(e.period_key, "2024-02-25");
    assert_eq!(e.date, d(2024, 3, 1));
    assert_eq!(
        e.time,
        TimeValue::At(NaiveTime::from_hms_opt(8, 30, 0).unwrap())
    );
    assert_eq!(e.currency, "USD");
    assert_eq!(e.impact, Impact::High);
    assert_eq!(e.event, "Non-Farm Payrolls");
    assert_eq!(e.actual, Some(FieldValue::Number(175.0)));
    assert_eq!(e.forecast, Some(FieldValue::Number(180.0)));
    assert_eq!(e.previous, Some(FieldValue::Number(150.0)));
    assert_eq!(state.last_known, Some(d(2024, 3, 1)));
}

#[test]
fn blank_date_carries_previous_row_date() {
    let mut state = DateState::new();
    let first = event(parse(&row("Fri\nMar 1", "8:30am", "A"), "2024-02-25", 2024, &mut state).unwrap());
    let second = event(parse(&row("", "10:00am", "B"), "2024-02-25", 2024, &mut state).unwrap());
    let third = event(parse(&row("", "All Day", "C"), "2024-02-25", 2024, &mut state).unwrap());

    assert_eq!(first.date, d(2024, 3, 1));
    assert_eq!(second.date, d(2024, 3, 1));
    assert_eq!(third.date, d(2024, 3, 1));
    assert_eq!(third.time, TimeValue::AllDay);
}

#[test]
fn missing_cells_read_as_empty() {
    let raw = RawRow::normal()
        .with(RowField::Date, "Tue\nMar 5")
        .with(RowField::Event, "Speech");
    let mut state = DateState::new();

    let e = event(parse(&raw, "2024-03-03", 2024, &mut state).unwrap());

    assert_eq!(e.currency, "");
    assert_eq!(e.impact, Impact::None);
    assert_eq!(e.time, TimeValue::AllDay);
    assert_eq!(e.actual, None);
    assert_eq!(e.forecast, None);
    assert_eq!(e.previous, None);
}

#[test]
fn separator_rows_are_skipped_without_touching_state() {
    let mut state = DateState::seeded(d(2024, 3, 4));
    let breaker = RawRow::new(RowKind::DayBreaker).with(RowField::Date, "Tue\nMar 5");
    let empty = RawRow::new(RowKind::NoEvent);

    assert_eq!(parse(&breaker, "2024-03-03", 2024, &mut state).unwrap(), ParsedRow::Skipped);
    assert_eq!(parse(&empty, "2024-03-03", 2024, &mut state).unwrap(), ParsedRow::Skipped);
    assert_eq!(state.last_known, Some(d(2024, 3, 4)));
    assert_eq!(state.rows_seen, 0);
}

#[test]
fn first_row_without_date_cannot_be_resolved() {
    let mut state = DateState::new();
    let err = parse(&row("", "8:30am", "Orphan"), "2024-02-25", 2024, &mut state).unwrap_err();

    match err {
        AppError::DateResolution { period, row } => {
            assert_eq!(period, "2024-02-25");
            assert_eq!(row, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn resolver_rules() {
    let known = d(2024, 3, 1);

    let carried = resolve("", 2024, Some(known)).unwrap();
    assert_eq!(carried.date, known);
    assert_eq!(carried.carried, None);

    assert!(resolve("", 2024, None).is_none());

    let own = resolve("Mon\nMar 4", 2024, Some(known)).unwrap();
    assert_eq!(own.date, d(2024, 3, 4));
    assert_eq!(own.carried, Some(d(2024, 3, 4)));

    let unreadable = resolve("Holiday", 2024, Some(known)).unwrap();
    assert_eq!(unreadable.date, known);
    assert_eq!(unreadable.carried, None);
    assert!(resolve("Holiday", 2024, None).is_none());
}
