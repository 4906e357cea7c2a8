use crate::db::ledger::PeriodRow;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{CYAN, RESET};
use crate::utils::table::{Column, Table};

pub struct PeriodsLogic;

impl PeriodsLogic {
    pub fn print(rows: &[PeriodRow]) {
        if rows.is_empty() {
            warning("No completed periods yet.");
            return;
        }

        header("Completed periods");

        let mut table = Table::new(vec![
            Column::new("Week"),
            Column::new("Records"),
            Column::new("Completed at"),
        ]);
        for r in rows {
            table.add_row(vec![
                r.period_key.clone(),
                r.records.to_string(),
                r.completed_at.clone(),
            ]);
        }

        print!("{}", table.render());
        let total: i64 = rows.iter().map(|r| r.records).sum();
        println!("\n{CYAN}{} period(s), {} record(s) scraped{RESET}", rows.len(), total);
    }
}
