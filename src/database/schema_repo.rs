use super::models::{LanguageId, FIXED_COLUMNS};
use sqlx::SqliteConnection;

/// Make sure `Localizations` has a nullable text column for `language`.
///
/// Returns `true` when the column was added. An existing column surfaces from
/// SQLite as a "duplicate column name" failure, which is the only error
/// treated as success (`false`). Columns are never removed.
pub async fn ensure_language(
    conn: &mut SqliteConnection,
    language: &LanguageId,
) -> Result<bool, sqlx::Error> {
    let sql = format!(
        "ALTER TABLE Localizations ADD COLUMN {} TEXT",
        language.quoted()
    );
    match sqlx::query(&sql).persistent(false).execute(&mut *conn).await {
        Ok(_) => {
            log::info!("Added language column {language}");
            Ok(true)
        }
        Err(e) if is_duplicate_column(&e) => Ok(false),
        Err(e) => Err(e),
    }
}

fn is_duplicate_column(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db) => db.message().contains("duplicate column name"),
        _ => false,
    }
}

/// Language columns currently present, in declaration order.
pub async fn language_columns(conn: &mut SqliteConnection) -> Result<Vec<String>, sqlx::Error> {
    let rows: Vec<(String,)> =
        sqlx::query_as("SELECT name FROM pragma_table_info('Localizations') ORDER BY cid")
            .persistent(false)
            .fetch_all(&mut *conn)
            .await?;

    Ok(rows
        .into_iter()
        .map(|(name,)| name)
        .filter(|name| !FIXED_COLUMNS.contains(&name.as_str()))
        .collect())
}

#[cfg(test)]
#[path = "tests/schema_repo_test.rs"]
mod tests;
