mod common;
use common::{week_feb25, week_mar03};
use ffcal::fetcher::calendar_html::parse_rows;
use ffcal::models::{RowField, RowKind};

#[test]
fn rows_are_extracted_in_page_order() {
    let rows = parse_rows(&week_feb25()).expect("calendar table present");

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].kind, RowKind::DayBreaker);
    assert_eq!(rows[1].kind, RowKind::Normal);
    assert_eq!(rows[1].get(RowField::Date), "Fri\nMar 1");
    assert_eq!(rows[1].get(RowField::Time), "8:30am");
    assert_eq!(rows[1].get(RowField::Currency), "USD");
    assert_eq!(rows[1].get(RowField::Impact), "High Impact Expected");
    assert_eq!(rows[1].get(RowField::Event), "Non-Farm Payrolls");
    assert_eq!(rows[1].get(RowField::Actual), "175K");
    assert_eq!(rows[2].get(RowField::Date), "");
    assert_eq!(rows[3].get(RowField::Impact), "Non-Economic");
}

#[test]
fn no_event_rows_are_classified() {
    let rows = parse_rows(&week_mar03()).expect("calendar table present");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].kind, RowKind::Normal);
    assert_eq!(rows[1].kind, RowKind::NoEvent);
    assert!(rows[1].is_skipped());
}

#[test]
fn impact_falls_back_to_cell_text() {
    let html = r#"<table class="calendar__table"><tr class="calendar__row">
        <td class="calendar__cell calendar__impact">Low Impact Expected</td>
    </tr></table>"#;
    let rows = parse_rows(html).unwrap();

    assert_eq!(rows[0].get(RowField::Impact), "Low Impact Expected");
    assert_eq!(rows[0].cell(RowField::Event), None);
}

#[test]
fn page_without_calendar_table() {
    assert!(parse_rows("<html><body><h1>Just a moment…</h1></body></html>").is_none());
}
