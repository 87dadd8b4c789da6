use serde::{Deserialize, Serialize};

/// One parsed `*.lg` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizationProject {
    pub name: String,
    pub files: Vec<LocalizedFile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedFile {
    pub path: String,
    pub text_items: Vec<TextItem>,
}

/// One translatable string unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    pub description: Option<String>,
    pub position: String,
    pub translations: TranslationSet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationSet {
    pub base: Translation,
    pub targets: Vec<Translation>,
}

/// Locale code as written in the document, with its (possibly empty) text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub locale: String,
    pub text: Option<String>,
}
