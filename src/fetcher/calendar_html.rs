//! Extraction of raw rows from a rendered calendar page.

use crate::models::{RawRow, RowField, RowKind};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table.calendar__table"));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr.calendar__row"));
static SPAN: LazyLock<Selector> = LazyLock::new(|| selector("span"));
static CELLS: LazyLock<Vec<(RowField, Selector)>> = LazyLock::new(|| {
    RowField::ALL
        .iter()
        .map(|f| (*f, selector(&format!("td.calendar__{}", f.css_name()))))
        .collect()
});

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// Extract every calendar row of `html`, in page order.
///
/// Returns `None` when the page has no calendar table at all (not rendered,
/// blocked, or an error page).
pub fn parse_rows(html: &str) -> Option<Vec<RawRow>> {
    let document = Html::parse_document(html);
    let table = document.select(&TABLE).next()?;

    let rows = table
        .select(&ROW)
        .map(|tr| {
            let class = tr.value().attr("class").unwrap_or("");
            let kind = if class.contains("day-breaker") {
                RowKind::DayBreaker
            } else if class.contains("no-event") {
                RowKind::NoEvent
            } else {
                RowKind::Normal
            };

            let mut row = RawRow::new(kind);
            for (field, sel) in CELLS.iter() {
                if let Some(cell) = tr.select(sel).next() {
                    let text = match field {
                        RowField::Impact => impact_label(cell),
                        _ => cell_text(cell),
                    };
                    row.set(*field, text);
                }
            }
            row
        })
        .collect();

    Some(rows)
}

/// Visible text of a cell, one line per text node.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// The impact cell shows an icon; its label lives in the span's title.
fn impact_label(cell: ElementRef<'_>) -> String {
    cell.select(&SPAN)
        .find_map(|span| span.value().attr("title"))
        .map(str::to_string)
        .unwrap_or_else(|| cell_text(cell))
}
