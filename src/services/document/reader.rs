use super::types::{LocalizationProject, LocalizedFile, TextItem, Translation, TranslationSet};
use super::DOCUMENT_EXTENSION;
use crate::types::errors::{ConvertError, ConvertResult};
use roxmltree::{Document, Node, ParsingOptions};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List the `*.lg` documents directly inside `root`, in the order the
/// filesystem yields them.
pub fn discover_documents(root: &Path) -> ConvertResult<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| ConvertError::Archive(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_document = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION));
        if is_document {
            documents.push(entry.into_path());
        }
    }
    Ok(documents)
}

/// A document read up to its first malformed element.
///
/// Everything before the malformed element is kept in `project`, so callers
/// can store it before reporting the failure.
#[derive(Debug)]
pub struct DocumentRead {
    pub project: LocalizationProject,
    /// Why reading stopped early, if it did.
    pub malformed: Option<ConvertError>,
}

impl DocumentRead {
    /// The whole project, or the error if any element was malformed.
    pub fn into_result(self) -> ConvertResult<LocalizationProject> {
        match self.malformed {
            Some(e) => Err(e),
            None => Ok(self.project),
        }
    }
}

impl LocalizationProject {
    pub fn from_path(path: &Path) -> ConvertResult<Self> {
        Self::read_path(path)?.into_result()
    }

    /// Parse document text, failing on any malformed element.
    pub fn parse(text: &str, origin: &Path) -> ConvertResult<Self> {
        Self::read(text, origin)?.into_result()
    }

    pub fn read_path(path: &Path) -> ConvertResult<DocumentRead> {
        let text = fs::read_to_string(path)?;
        Self::read(&text, path)
    }

    /// Read document text, keeping the files and text items that precede the
    /// first malformed one. Unparseable XML or a missing `ProjName` still fails
    /// outright. `origin` is only used in error messages.
    pub fn read(text: &str, origin: &Path) -> ConvertResult<DocumentRead> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(text, options)
            .map_err(|e| ConvertError::document(origin, e.to_string()))?;
        let root = doc.root_element();

        let name = required_text(root, "ProjName", origin)?;
        let mut files = Vec::new();
        let malformed = read_files(root, origin, &mut files).err();

        Ok(DocumentRead {
            project: Self { name, files },
            malformed,
        })
    }

    /// First target (`tran`) translation anywhere in the document.
    pub fn first_target(&self) -> Option<&Translation> {
        self.files
            .iter()
            .flat_map(|f| &f.text_items)
            .flat_map(|item| &item.translations.targets)
            .next()
    }

    pub fn text_item_count(&self) -> usize {
        self.files.iter().map(|f| f.text_items.len()).sum()
    }
}

/// Append files in document order; a file whose items stop early is kept
/// with the items read so far.
fn read_files(root: Node, origin: &Path, files: &mut Vec<LocalizedFile>) -> ConvertResult<()> {
    for file in children(root, "File") {
        let path = required_text(file, "Filepath", origin)?;
        let mut text_items = Vec::new();
        let result = children(file, "TextItem").try_for_each(|item| -> ConvertResult<()> {
            text_items.push(parse_text_item(item, origin)?);
            Ok(())
        });
        files.push(LocalizedFile { path, text_items });
        result?;
    }
    Ok(())
}

fn parse_text_item(item: Node, origin: &Path) -> ConvertResult<TextItem> {
    let description = child(item, "Description").and_then(element_text);
    let position = required_text(item, "Position", origin)?;

    let set = child(item, "TranslationSet")
        .ok_or_else(|| missing("TranslationSet", item, origin))?;
    let base = child(set, "base").ok_or_else(|| missing("base", set, origin))?;
    let base = parse_translation(base, origin)?;
    let targets = children(set, "tran")
        .map(|tran| parse_translation(tran, origin))
        .collect::<ConvertResult<Vec<_>>>()?;

    Ok(TextItem {
        description,
        position,
        translations: TranslationSet { base, targets },
    })
}

fn parse_translation(node: Node, origin: &Path) -> ConvertResult<Translation> {
    let locale = node.attribute("loc").ok_or_else(|| {
        ConvertError::document(
            origin,
            format!("<{}> without loc attribute", node.tag_name().name()),
        )
    })?;
    Ok(Translation {
        locale: locale.to_string(),
        text: element_text(node),
    })
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

/// Leading text of an element; `None` for empty elements.
fn element_text(node: Node) -> Option<String> {
    node.text().map(str::to_string)
}

fn required_text(node: Node, name: &str, origin: &Path) -> ConvertResult<String> {
    child(node, name)
        .and_then(element_text)
        .ok_or_else(|| missing(name, node, origin))
}

fn missing(name: &str, parent: Node, origin: &Path) -> ConvertError {
    let pos = parent.document().text_pos_at(parent.range().start);
    ConvertError::document(
        origin,
        format!(
            "missing <{name}> in <{}> at line {}",
            parent.tag_name().name(),
            pos.row
        ),
    )
}
