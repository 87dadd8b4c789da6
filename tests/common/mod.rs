#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// A single-file, single-item localization project document.
pub fn single_item_document(
    project: &str,
    path: &str,
    base: (&str, &str),
    target: (&str, &str),
) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Proj>
  <ProjName>{project}</ProjName>
  <File>
    <Filepath>{path}</Filepath>
    <TextItem>
      <Description>title</Description>
      <Position>0</Position>
      <TranslationSet>
        <base loc="{}">{}</base>
        <tran loc="{}">{}</tran>
      </TranslationSet>
    </TextItem>
  </File>
</Proj>
"#,
        base.0, base.1, target.0, target.1
    )
}

/// Create an unpacked export directory `name` under `parent` holding the given documents.
pub fn export_dir(parent: &Path, name: &str, documents: &[(&str, String)]) -> PathBuf {
    let dir = parent.join(name);
    fs::create_dir_all(&dir).unwrap();
    for (file_name, content) in documents {
        fs::write(dir.join(file_name), content).unwrap();
    }
    dir
}
