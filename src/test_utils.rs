use crate::database::Store;
use std::sync::Once;

static INIT: Once = Once::new();

pub struct TestContext {
    pub store: Store,
}

pub async fn init_test_db() -> TestContext {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });

    // Fresh in-memory store per test, migrations applied
    let store = Store::open_in_memory()
        .await
        .expect("Failed to create in-memory store");

    TestContext { store }
}

/// One `<TextItem>` of a generated `.lg` document.
pub struct LgItem<'a> {
    pub position: &'a str,
    pub description: &'a str,
    pub base: (&'a str, &'a str),
    pub targets: &'a [(&'a str, &'a str)],
}

/// Render a localization project document with the given files and text items.
pub fn lg_document(project: &str, files: &[(&str, &[LgItem])]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Proj>\n");
    xml.push_str(&format!("  <ProjName>{project}</ProjName>\n"));
    for (path, items) in files {
        xml.push_str(&format!("  <File>\n    <Filepath>{path}</Filepath>\n"));
        for item in items.iter() {
            xml.push_str("    <TextItem>\n");
            xml.push_str(&format!(
                "      <Description>{}</Description>\n      <Position>{}</Position>\n",
                item.description, item.position
            ));
            xml.push_str("      <TranslationSet>\n");
            xml.push_str(&format!(
                "        <base loc=\"{}\">{}</base>\n",
                item.base.0, item.base.1
            ));
            for (loc, text) in item.targets {
                xml.push_str(&format!("        <tran loc=\"{loc}\">{text}</tran>\n"));
            }
            xml.push_str("      </TranslationSet>\n    </TextItem>\n");
        }
        xml.push_str("  </File>\n");
    }
    xml.push_str("</Proj>\n");
    xml
}
