use rusqlite::Connection;

use crate::error::Error;

refinery::embed_migrations!("migrations");

const HISTORY_TABLE: &str = "_refinery_schema_history_docsmith";

/// Bring the document schema up to date. Returns how many migrations ran.
pub fn run_migrations(conn: &mut Connection) -> Result<usize, Error> {
    let report = migrations::runner()
        .set_migration_table_name(HISTORY_TABLE)
        .run(conn)?;

    let applied = report.applied_migrations();
    for migration in applied {
        tracing::info!(
            name = %migration.name(),
            version = migration.version(),
            "applied document schema migration"
        );
    }
    Ok(applied.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_apply_once() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert!(run_migrations(&mut conn).unwrap() >= 1);
        assert_eq!(run_migrations(&mut conn).unwrap(), 0);

        let columns: Vec<String> = conn
            .prepare("SELECT name FROM pragma_table_info('documents')")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        for expected in ["id", "position", "doc_type", "payload"] {
            assert!(columns.iter().any(|c| c == expected), "missing {expected}");
        }
    }
}
