use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ordered schema migrations: (version, description, SQL).
///
/// Applied versions are recorded in the `log` table as `migration_applied`
/// rows, so a version never runs twice.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20240301_0001_create_periods",
        "Created periods table",
        r#"
        CREATE TABLE IF NOT EXISTS periods (
            period_key   TEXT PRIMARY KEY,
            completed_at TEXT NOT NULL,
            records      INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "20240302_0002_index_log_operation",
        "Indexed log by operation",
        r#"
        CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation, target);
        "#,
    ),
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, version: &str, description: &str, sql: &str) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, description],
    )?;
    tx.commit()?;

    success(format!("Migration applied: {version} → {description}"));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, description, sql) in MIGRATIONS {
        if !is_applied(conn, version)? {
            apply(conn, version, description, sql)?;
        }
    }

    Ok(())
}
