use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::types::errors::ConvertError;

/// Store-assigned identifier of a row in `Files`.
pub type FileId = i64;

/// Language column every record must carry; created by the initial migration.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Columns of `Localizations` that are not language columns.
pub const FIXED_COLUMNS: &[&str] = &["file_id", "position", "description"];

/// A locale code normalized for use as a `Localizations` column name.
///
/// The only way to build one is through normalization, so holding a
/// `LanguageId` means the separators are canonical (`zh-Hans` -> `zh_Hans`)
/// and the name contains nothing but ASCII alphanumerics and `_`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageId(String);

impl LanguageId {
    pub fn normalize(locale: &str) -> Result<Self, ConvertError> {
        let normalized = locale.trim().replace('-', "_");
        let valid = !normalized.is_empty()
            && normalized
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(ConvertError::InvalidLanguage(locale.to_string()));
        }
        Ok(Self(normalized))
    }

    /// The designated default language (`en`).
    pub fn default_language() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }

    /// Whether both identifiers name the same column. SQLite column names
    /// are case-insensitive, so `EN` and `en` are one column.
    pub fn same_column(&self, other: &LanguageId) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Double-quoted form for splicing into SQL.
    pub(crate) fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageId {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}

impl TryFrom<String> for LanguageId {
    type Error = ConvertError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::normalize(&value)
    }
}

impl From<LanguageId> for String {
    fn from(value: LanguageId) -> Self {
        value.0
    }
}

/// One localizable source file within one project, stored in `Files`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FileRow {
    pub id: FileId,
    pub project: String,
    pub path: String,
}

/// One string slot with its content in every known language.
///
/// `texts` holds every language column present in the store at read time,
/// `None` where the record has no content for that language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizationRecord {
    pub file_id: FileId,
    pub position: String,
    pub description: Option<String>,
    pub texts: BTreeMap<String, Option<String>>,
}

impl LocalizationRecord {
    /// Text stored for `language`, if the column exists and is non-null.
    pub fn text(&self, language: &str) -> Option<&str> {
        self.texts.get(language).and_then(|t| t.as_deref())
    }
}
