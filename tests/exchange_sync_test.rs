// Integration tests for exchange files, kit sync and seeding against on-disk stores

use codekit::exchange::{self, ExchangeRecord};
use codekit::{Error, RESERVED_BUCKET, SnippetDraft, SqliteStore};
use std::path::{Path, PathBuf};

fn open_store(dir: &Path) -> SqliteStore {
    SqliteStore::open(&dir.join("codekit.db")).expect("Failed to open store")
}

fn write_kit(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_discover_lists_only_codekit_files() {
    let kits = tempfile::tempdir().unwrap();
    write_kit(kits.path(), "b.codekit", "{}");
    write_kit(kits.path(), "a.codekit", "{}");
    write_kit(kits.path(), "notes.txt", "{}");
    std::fs::create_dir(kits.path().join("nested")).unwrap();
    write_kit(&kits.path().join("nested"), "c.codekit", "{}");

    let files = exchange::discover(kits.path()).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, ["a.codekit", "b.codekit"]);
}

#[test]
fn test_sync_reconciles_and_skips_bad_files() {
    let db = tempfile::tempdir().unwrap();
    let kits = tempfile::tempdir().unwrap();
    let store = open_store(db.path());

    let custom = store
        .add_custom(&SnippetDraft::new("Utilitários", "Helper", "py", "my own helper"))
        .unwrap();

    write_kit(
        kits.path(),
        "helper.codekit",
        r#"{"title": "Helper", "language": "py", "code": "v2-code", "category": "Utilitários", "version": "2.0"}"#,
    );
    write_kit(
        kits.path(),
        "broken.codekit",
        r#"{"title": "Broken", "language": "py", "category": "Utilitários"}"#,
    );
    write_kit(
        kits.path(),
        "docker.codekit",
        r#"{"title": "Prune", "language": "bash", "code_content": "docker system prune", "category_origin": "Docker"}"#,
    );

    let files = exchange::discover(kits.path()).unwrap();
    let report = exchange::sync_files(&store, &files);
    assert_eq!(report.inserted, 2);
    assert_eq!(report.updated, 0);
    assert_eq!(report.failed.len(), 1);
    assert!(report.failed[0].path.ends_with("broken.codekit"));

    // Second run with new content updates in place
    write_kit(
        kits.path(),
        "helper.codekit",
        r#"{"title": "Helper", "language": "py", "code": "v3-code", "category": "Utilitários", "version": "3.0"}"#,
    );
    let report = exchange::sync_files(&store, &files);
    assert_eq!(report.inserted, 0);
    assert_eq!(report.updated, 2);

    let rows = store.list_by_category("Utilitários").unwrap();
    let system: Vec<_> = rows.iter().filter(|s| !s.is_custom).collect();
    assert_eq!(system.len(), 1);
    assert_eq!(system[0].code_content, "v3-code");
    assert_eq!(system[0].version, "3.0");

    // The user's snippet with the same title survives both syncs
    let mine = store.get_snippet(custom).unwrap().unwrap();
    assert_eq!(mine.code_content, "my own helper");
    assert!(mine.is_custom);

    assert!(store.find_category("Docker").unwrap().is_some());
}

#[test]
fn test_seed_adds_duplicates() {
    let db = tempfile::tempdir().unwrap();
    let kits = tempfile::tempdir().unwrap();
    let store = open_store(db.path());

    let kit = write_kit(
        kits.path(),
        "now.codekit",
        r#"{"title": "Now", "language": "py", "code": "datetime.now()", "category": "Datas"}"#,
    );
    let missing = kits.path().join("missing.codekit");

    let report = exchange::seed_files(&store, &[kit.clone(), kit, missing]);
    assert_eq!(report.inserted, 2);
    assert_eq!(report.failed.len(), 1);

    let rows = store.list_by_category("Datas").unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|s| !s.is_custom));
}

#[test]
fn test_export_then_import_lands_as_custom() {
    let db = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let store = open_store(db.path());

    let id = store
        .add_system(&SnippetDraft::new("Arquivos", "Read file", "rust", "fs::read_to_string(p)").with_version("1.80"))
        .unwrap();

    let path = exchange::export_snippet(&store, id, out.path()).unwrap();
    assert_eq!(path, out.path().join("Read_file.codekit"));

    let record = exchange::read_file(&path).unwrap();
    assert_eq!(
        record,
        ExchangeRecord {
            title: "Read file".into(),
            language: "rust".into(),
            code: "fs::read_to_string(p)".into(),
            category: "Arquivos".into(),
            version: "1.80".into(),
        }
    );

    let imported = exchange::import_file(&store, &path).unwrap();
    let snippet = store.get_snippet(imported).unwrap().unwrap();
    assert!(snippet.is_custom);
    assert_eq!(snippet.category_name, "Arquivos");
    assert_eq!(snippet.version, "1.80");

    let bucket = store.list_by_category(RESERVED_BUCKET).unwrap();
    assert_eq!(bucket.len(), 1);
    assert_eq!(bucket[0].id, imported);
}

#[test]
fn test_export_unknown_id() {
    let db = tempfile::tempdir().unwrap();
    let store = open_store(db.path());
    let err = exchange::export_snippet(&store, 77, db.path()).unwrap_err();
    assert!(matches!(err, Error::SnippetNotFound(77)));
}

#[test]
fn test_import_missing_code_mutates_nothing() {
    let db = tempfile::tempdir().unwrap();
    let kits = tempfile::tempdir().unwrap();
    let store = open_store(db.path());

    let path = write_kit(
        kits.path(),
        "incomplete.codekit",
        r#"{"title": "T", "language": "py", "category": "Strings"}"#,
    );
    assert!(matches!(exchange::import_file(&store, &path), Err(Error::Format(_))));
    assert_eq!(store.count_all().unwrap(), 0);
}
