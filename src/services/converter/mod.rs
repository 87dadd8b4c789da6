//! Aggregation driver: one linear pass per archive, no rollback.
//!
//! Every document in the archive is read in filesystem order; every file is
//! registered and every (base, target) translation pair merged. Each text
//! item commits on its own, so a failure (including a malformed text item)
//! leaves earlier items and archives in the store and aborts everything
//! after it.

use crate::database::localization_repo::{self, MergeOutcome, TextItemMerge};
use crate::database::models::{FileId, LanguageId};
use crate::database::{file_repo, schema_repo, Store};
use crate::services::config::AppConfig;
use crate::services::document::{self, DocumentRead, LocalizationProject, TextItem};
use crate::services::{archive, language};
use crate::types::errors::ConvertResult;
use serde::Serialize;
use sqlx::{Connection, SqliteConnection};
use std::path::{Path, PathBuf};

/// What one archive contributed to the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConvertReport {
    pub archive: PathBuf,
    pub documents: usize,
    pub files: usize,
    pub text_items: usize,
    pub records_created: usize,
    pub records_updated: usize,
    /// Language columns that did not exist before this archive.
    pub languages_added: Vec<String>,
}

/// Open the configured store and convert `archives` strictly in order,
/// stopping at the first failure.
pub async fn run(config: &AppConfig, archives: &[PathBuf]) -> ConvertResult<Vec<ConvertReport>> {
    let mut store = Store::open(&config.database_path).await?;
    let mut reports = Vec::with_capacity(archives.len());
    for archive in archives {
        reports.push(convert(&mut store, archive, config).await?);
    }
    store.close().await?;
    log::info!("Done");
    Ok(reports)
}

/// Merge every localization project document inside `archive` into `store`.
pub async fn convert(
    store: &mut Store,
    archive: &Path,
    config: &AppConfig,
) -> ConvertResult<ConvertReport> {
    let mounted = archive::mount(archive, &config.hdiutil)?;
    let documents = document::discover_documents(mounted.root())?;

    let mut report = ConvertReport {
        archive: archive.to_path_buf(),
        ..ConvertReport::default()
    };
    if documents.is_empty() {
        log::warn!("No localization documents found in {}", archive.display());
        return Ok(report);
    }

    let conn = store.conn();
    let columns_before = schema_repo::language_columns(conn).await?;

    for (index, path) in documents.iter().enumerate() {
        let DocumentRead { project, malformed } = LocalizationProject::read_path(path)?;
        if index == 0 {
            // Pre-create the export's column; every pair is still ensured on merge.
            if let Some(language) = language::export_language(&project)? {
                log::info!("Export language of {} is {language}", archive.display());
                schema_repo::ensure_language(conn, &language).await?;
            }
        }
        add_project(conn, &project, path, &mut report).await?;
        // Items before the malformed one stay committed; nothing after it is read.
        if let Some(e) = malformed {
            return Err(e);
        }
    }

    report.languages_added = schema_repo::language_columns(conn)
        .await?
        .into_iter()
        .filter(|c| !columns_before.contains(c))
        .collect();

    log::info!(
        "Converted {}: {} documents, {} files, {} text items ({} records created, {} updated)",
        archive.display(),
        report.documents,
        report.files,
        report.text_items,
        report.records_created,
        report.records_updated
    );
    Ok(report)
}

async fn add_project(
    conn: &mut SqliteConnection,
    project: &LocalizationProject,
    path: &Path,
    report: &mut ConvertReport,
) -> ConvertResult<()> {
    log::info!(
        "Processing {} (project {}, {} text items)",
        path.display(),
        project.name,
        project.text_item_count()
    );
    for file in &project.files {
        let file_id = file_repo::register_file(conn, &project.name, &file.path).await?;
        log::debug!("{} -> file {file_id}", file.path);
        for item in &file.text_items {
            add_text_item(conn, file_id, item, report).await?;
        }
        report.files += 1;
    }
    report.documents += 1;
    Ok(())
}

async fn add_text_item(
    conn: &mut SqliteConnection,
    file_id: FileId,
    item: &TextItem,
    report: &mut ConvertReport,
) -> ConvertResult<()> {
    let base = &item.translations.base;
    // Validates every locale of the item before anything is written; base comes first.
    let languages = language::detect_languages(&item.translations)?;
    let base_language = &languages[0];

    let mut tx = conn.begin().await?;
    for target in &item.translations.targets {
        let target_language = LanguageId::normalize(&target.locale)?;
        if target_language.same_column(base_language) {
            log::debug!(
                "Skipping {} translation of file {file_id} position {}: same as base",
                target.locale,
                item.position
            );
            continue;
        }
        let merge = TextItemMerge {
            file_id,
            position: &item.position,
            description: item.description.as_deref(),
            base_language,
            base_text: base.text.as_deref(),
            target_language: &target_language,
            target_text: target.text.as_deref(),
        };
        match localization_repo::merge_text_item(&mut *tx, &merge).await? {
            MergeOutcome::Inserted => report.records_created += 1,
            MergeOutcome::Updated => report.records_updated += 1,
        }
    }
    tx.commit().await?;

    report.text_items += 1;
    Ok(())
}

#[cfg(test)]
#[path = "tests/converter_tests.rs"]
mod tests;
