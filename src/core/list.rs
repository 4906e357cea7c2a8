use crate::core::filter::EventFilter;
use crate::models::{CalendarEvent, FieldValue};
use crate::ui::messages::{info, warning};
use crate::utils::colors::color_for_impact;
use crate::utils::table::{Column, Table};

pub struct ListLogic;

fn figure(v: &Option<FieldValue>) -> String {
    v.as_ref().map(|f| f.to_string()).unwrap_or_default()
}

impl ListLogic {
    /// Print the stored events matching `filter`; returns how many matched.
    pub fn print(events: &[CalendarEvent], filter: &EventFilter) -> usize {
        let mut table = Table::new(vec![
            Column::new("Date"),
            Column::new("Time"),
            Column::new("Cur"),
            Column::new("Impact"),
            Column::new("Event").max(48),
            Column::new("Actual").max(12),
            Column::new("Forecast").max(12),
            Column::new("Previous").max(12),
        ]);

        for e in events.iter().filter(|e| filter.matches(e)) {
            table.add_colored_row(
                vec![
                    e.date_str(),
                    e.time.to_string(),
                    e.currency.clone(),
                    e.impact.to_string(),
                    e.event.clone(),
                    figure(&e.actual),
                    figure(&e.forecast),
                    figure(&e.previous),
                ],
                color_for_impact(e.impact),
            );
        }

        let shown = table.rows.len();
        if shown == 0 {
            warning("No events found for the selected filters.");
            return 0;
        }

        print!("{}", table.render());
        println!();
        info(format!("{shown} of {} stored events", events.len()));
        shown
    }
}
