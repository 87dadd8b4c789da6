use super::models::{FileId, FileRow};
use sqlx::SqliteConnection;

/// Look up the identifier for `path`, creating the file row on first sight.
///
/// The path alone identifies a file. When it is already registered the
/// existing id is returned and `project` is ignored, so the first
/// registrant's project is kept.
pub async fn register_file(
    conn: &mut SqliteConnection,
    project: &str,
    path: &str,
) -> Result<FileId, sqlx::Error> {
    let inserted =
        sqlx::query("INSERT INTO Files (project, path) VALUES (?, ?) ON CONFLICT(path) DO NOTHING")
            .bind(project)
            .bind(path)
            .execute(&mut *conn)
            .await?;

    let (id,): (FileId,) = sqlx::query_as("SELECT id FROM Files WHERE path = ?")
        .bind(path)
        .fetch_one(&mut *conn)
        .await?;

    if inserted.rows_affected() > 0 {
        log::debug!("Registered {path} ({project}) as file {id}");
    }
    Ok(id)
}

pub async fn get_file_by_path(
    conn: &mut SqliteConnection,
    path: &str,
) -> Result<Option<FileRow>, sqlx::Error> {
    sqlx::query_as::<_, FileRow>("SELECT id, project, path FROM Files WHERE path = ?")
        .bind(path)
        .fetch_optional(&mut *conn)
        .await
}

/// All registered files, oldest first.
pub async fn list_files(conn: &mut SqliteConnection) -> Result<Vec<FileRow>, sqlx::Error> {
    sqlx::query_as::<_, FileRow>("SELECT id, project, path FROM Files ORDER BY id")
        .fetch_all(&mut *conn)
        .await
}

#[cfg(test)]
#[path = "tests/file_repo_test.rs"]
mod tests;
