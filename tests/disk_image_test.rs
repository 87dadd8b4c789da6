//! Disk images are attached through a stand-in `hdiutil` that copies the
//! documents of a `*.dmg` fixture directory onto the mount point and records
//! every invocation.
#![cfg(unix)]

mod common;

use common::{export_dir, init_logger, single_item_document};
use locdb_lib::database::{localization_repo, Store};
use locdb_lib::AppConfig;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fake_hdiutil(dir: &Path, calls: &Path) -> PathBuf {
    // attach -readonly -noverify -noautoopen -nobrowse -quiet -mountpoint <dir> <image>
    // detach <dir> -quiet
    let script = format!(
        "#!/bin/sh\necho \"$1\" >> '{calls}'\nif [ \"$1\" = attach ]; then\n  cp \"$9\"/*.lg \"$8\"/ || exit 1\nfi\nexit 0\n",
        calls = calls.display()
    );
    let path = dir.join("hdiutil");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn calls(log: &Path) -> Vec<String> {
    fs::read_to_string(log)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_disk_image_is_detached_on_success_and_failure() {
    init_logger();
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("calls.log");
    let config = AppConfig {
        database_path: dir.path().join("ios.sqlite"),
        hdiutil: fake_hdiutil(dir.path(), &log),
    };

    let good = export_dir(
        dir.path(),
        "Good.dmg",
        &[(
            "App.lg",
            single_item_document("App", "A/B.strings", ("en", "Hello"), ("fr", "Bonjour")),
        )],
    );
    let reports = locdb_lib::run(&config, &[good]).await.unwrap();
    assert_eq!(reports[0].records_created, 1);
    assert_eq!(calls(&log), vec!["attach", "detach"]);

    let bad = export_dir(
        dir.path(),
        "Bad.dmg",
        &[("App.lg", "<Proj><ProjName>App</ProjName><File/></Proj>".to_string())],
    );
    assert!(locdb_lib::run(&config, &[bad]).await.is_err());
    // Released even though the conversion failed
    assert_eq!(calls(&log), vec!["attach", "detach", "attach", "detach"]);

    let mut store = Store::open(&config.database_path).await.unwrap();
    assert_eq!(
        localization_repo::count_records(store.conn()).await.unwrap(),
        1
    );
}
