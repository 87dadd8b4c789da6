use super::models::{FileId, LanguageId, LocalizationRecord, FIXED_COLUMNS};
use super::schema_repo;
use sqlx::{Column, Connection, Row, SqliteConnection};
use std::collections::BTreeMap;

/// One (base, target) translation pair of a text item, addressed by file and position.
#[derive(Debug, Clone, Copy)]
pub struct TextItemMerge<'a> {
    pub file_id: FileId,
    pub position: &'a str,
    pub description: Option<&'a str>,
    pub base_language: &'a LanguageId,
    pub base_text: Option<&'a str>,
    pub target_language: &'a LanguageId,
    pub target_text: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Inserted,
    Updated,
}

/// Merge one translation pair into the record at `(file_id, position)`.
///
/// An existing record only gets its target column and description
/// overwritten; base text and other languages stay as they are. A missing
/// record is created with description, base text and target text, leaving
/// every other language null. Both language columns are ensured first.
///
/// The update and the fallback insert share one transaction, so no other
/// writer can create the row in between.
pub async fn merge_text_item(
    conn: &mut SqliteConnection,
    item: &TextItemMerge<'_>,
) -> Result<MergeOutcome, sqlx::Error> {
    schema_repo::ensure_language(&mut *conn, item.base_language).await?;
    schema_repo::ensure_language(&mut *conn, item.target_language).await?;

    let target = item.target_language.quoted();
    let mut tx = conn.begin().await?;

    let update = format!(
        "UPDATE Localizations SET {target} = ?, description = ? WHERE file_id = ? AND position = ?"
    );
    let updated = sqlx::query(&update)
        .persistent(false)
        .bind(item.target_text)
        .bind(item.description)
        .bind(item.file_id)
        .bind(item.position)
        .execute(&mut *tx)
        .await?;

    if updated.rows_affected() > 0 {
        tx.commit().await?;
        return Ok(MergeOutcome::Updated);
    }

    if item.base_language.same_column(item.target_language) {
        let insert = format!(
            "INSERT INTO Localizations (file_id, position, description, {target}) VALUES (?, ?, ?, ?)"
        );
        sqlx::query(&insert)
            .persistent(false)
            .bind(item.file_id)
            .bind(item.position)
            .bind(item.description)
            .bind(item.target_text)
            .execute(&mut *tx)
            .await?;
    } else {
        let base = item.base_language.quoted();
        let insert = format!(
            "INSERT INTO Localizations (file_id, position, description, {base}, {target}) VALUES (?, ?, ?, ?, ?)"
        );
        sqlx::query(&insert)
            .persistent(false)
            .bind(item.file_id)
            .bind(item.position)
            .bind(item.description)
            .bind(item.base_text)
            .bind(item.target_text)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(MergeOutcome::Inserted)
}

/// Read the record at `(file_id, position)` with every language column present in the store.
pub async fn get_record(
    conn: &mut SqliteConnection,
    file_id: FileId,
    position: &str,
) -> Result<Option<LocalizationRecord>, sqlx::Error> {
    // Column set changes as languages are added; never reuse a cached statement.
    let row = sqlx::query("SELECT * FROM Localizations WHERE file_id = ? AND position = ?")
        .persistent(false)
        .bind(file_id)
        .bind(position)
        .fetch_optional(&mut *conn)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let mut texts = BTreeMap::new();
    for column in row.columns() {
        if FIXED_COLUMNS.contains(&column.name()) {
            continue;
        }
        let text: Option<String> = row.try_get(column.ordinal())?;
        texts.insert(column.name().to_string(), text);
    }

    Ok(Some(LocalizationRecord {
        file_id: row.try_get("file_id")?,
        position: row.try_get("position")?,
        description: row.try_get("description")?,
        texts,
    }))
}

pub async fn count_records(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM Localizations")
        .fetch_one(&mut *conn)
        .await?;
    Ok(row.0)
}

#[cfg(test)]
#[path = "tests/localization_repo_test.rs"]
mod tests;
