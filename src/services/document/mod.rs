//! Reader for localization project documents (`*.lg`).
//!
//! A document names its project and lists files; every file carries text
//! items, and every text item one `base` translation plus any number of
//! `tran` translations:
//!
//! ```text
//! <Proj>
//!   <ProjName>App</ProjName>
//!   <File>
//!     <Filepath>App/en.lproj/Main.strings</Filepath>
//!     <TextItem>
//!       <Description>title</Description>
//!       <Position>0</Position>
//!       <TranslationSet>
//!         <base loc="en">Hello</base>
//!         <tran loc="fr">Bonjour</tran>
//!       </TranslationSet>
//!     </TextItem>
//!   </File>
//! </Proj>
//! ```

mod reader;
mod types;

pub use reader::{discover_documents, DocumentRead};
pub use types::{LocalizationProject, LocalizedFile, TextItem, Translation, TranslationSet};

/// Extension of localization project documents.
pub const DOCUMENT_EXTENSION: &str = "lg";

#[cfg(test)]
#[path = "tests/reader_tests.rs"]
mod tests;
