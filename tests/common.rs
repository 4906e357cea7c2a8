#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// The binary, isolated from the user's real configuration.
pub fn ffcal(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("ffcal");
    cmd.env("HOME", home).env("RUST_LOG", "warn");
    cmd
}

/// Fresh, empty working directory inside the system temp dir.
pub fn setup_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("ffcal_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Path inside `dir` as a string argument.
pub fn arg(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().to_string()
}

/// One calendar table row. `date` is the cell as rendered, e.g. "Fri Mar 1",
/// or "" for a row continuing the previous day.
pub fn event_row(
    date: &str,
    time: &str,
    currency: &str,
    impact: &str,
    event: &str,
    figures: [&str; 3],
) -> String {
    let date_cell = match date.split_once(' ') {
        Some((weekday, rest)) => format!("<span class=\"date\">{weekday}<span>{rest}</span></span>"),
        None => String::new(),
    };
    format!(
        r#"<tr class="calendar__row">
  <td class="calendar__cell calendar__date">{date_cell}</td>
  <td class="calendar__cell calendar__time"><div>{time}</div></td>
  <td class="calendar__cell calendar__currency"> {currency} </td>
  <td class="calendar__cell calendar__impact"><span title="{impact}" class="icon"></span></td>
  <td class="calendar__cell calendar__event"><span class="calendar__event-title">{event}</span></td>
  <td class="calendar__cell calendar__actual">{}</td>
  <td class="calendar__cell calendar__forecast">{}</td>
  <td class="calendar__cell calendar__previous">{}</td>
</tr>"#,
        figures[0], figures[1], figures[2]
    )
}

pub fn day_breaker(label: &str) -> String {
    format!(
        r#"<tr class="calendar__row calendar__row--day-breaker"><td class="calendar__cell" colspan="8"><span>{label}</span></td></tr>"#
    )
}

pub fn no_event_row() -> String {
    r#"<tr class="calendar__row calendar__row--no-event"><td class="calendar__cell calendar__event">No events</td></tr>"#.to_string()
}

/// A full page wrapping `rows` in the calendar table.
pub fn page(rows: &[String]) -> String {
    format!(
        "<html><body><table class=\"calendar__table\"><tbody>\n{}\n</tbody></table></body></html>",
        rows.join("\n")
    )
}

/// Week of Sunday 2024-02-25: payrolls Friday, then a continuation row and a
/// holiday.
pub fn week_feb25() -> String {
    page(&[
        day_breaker("Fri Mar 1"),
        event_row(
            "Fri Mar 1",
            "8:30am",
            "USD",
            "High Impact Expected",
            "Non-Farm Payrolls",
            ["175K", "180K", "150K"],
        ),
        event_row(
            "",
            "8:30am",
            "USD",
            "High Impact Expected",
            "Unemployment Rate",
            ["3.9%", "3.7%", "3.7%"],
        ),
        event_row("", "All Day", "EUR", "Non-Economic", "Bank Holiday", ["", "", ""]),
    ])
}

/// Week of Sunday 2024-03-03.
pub fn week_mar03() -> String {
    page(&[
        event_row(
            "Tue Mar 5",
            "10:00am",
            "USD",
            "Medium Impact Expected",
            "ISM Services PMI",
            ["52.6", "53.0", "53.4"],
        ),
        no_event_row(),
    ])
}

/// Snapshot directory holding both weeks.
pub fn write_snapshots(dir: &Path) -> PathBuf {
    let snaps = dir.join("pages");
    fs::create_dir_all(&snaps).expect("create snapshot dir");
    fs::write(snaps.join("week-2024-02-25.html"), week_feb25()).expect("write week");
    fs::write(snaps.join("week-2024-03-03.html"), week_mar03()).expect("write week");
    snaps
}
