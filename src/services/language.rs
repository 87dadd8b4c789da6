//! Language detection over parsed documents.
//!
//! Locale codes are turned into [`LanguageId`]s, the column identifiers the
//! store understands.

use crate::database::models::LanguageId;
use crate::services::document::{LocalizationProject, TranslationSet};
use crate::types::errors::ConvertResult;

/// Languages present in a translation set: the base language first, then each
/// target language naming a distinct column, in document order.
pub fn detect_languages(set: &TranslationSet) -> ConvertResult<Vec<LanguageId>> {
    let mut languages = vec![LanguageId::normalize(&set.base.locale)?];
    for target in &set.targets {
        let language = LanguageId::normalize(&target.locale)?;
        if !languages.iter().any(|l| l.same_column(&language)) {
            languages.push(language);
        }
    }
    Ok(languages)
}

/// Language an export was produced for, taken from the document's first
/// target translation. `None` when the document has no targets at all.
pub fn export_language(project: &LocalizationProject) -> ConvertResult<Option<LanguageId>> {
    project
        .first_target()
        .map(|t| LanguageId::normalize(&t.locale))
        .transpose()
}

#[cfg(test)]
#[path = "tests/language_tests.rs"]
mod tests;
