use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

/// ANSI color for an operation recorded in the internal log.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "sync" => Colour::Green,
        "period" => Colour::Cyan,
        "abandon" => Colour::Red,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// Cut `s` to `max` visible characters.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: Option<String> = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target.unwrap_or_default(), message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        // Width computed on the plain text, capped at 40
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| op.len() + target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(40);
        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let plain = if target.is_empty() {
                operation.clone()
            } else {
                truncate(&format!("{operation} ({target})"), op_w)
            };

            // only the operation word is colored
            let colored = match plain.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color_for_operation(&operation).paint(op), rest),
                None => color_for_operation(&operation).paint(plain.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(plain.chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
