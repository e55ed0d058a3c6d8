// tests/store.rs
mod common;

use std::fs;

use etf_view::{
    error::Error,
    record::Record,
    store::JsonStore,
};

use common::{kodex200_record, tmp_dir};

#[test]
fn save_then_load_keeps_hangul_and_order() {
    let dir = tmp_dir("store_roundtrip");
    let store = JsonStore::new(dir.join("stock.json"));

    let second = Record { code: "360750".into(), name: "TIGER 미국S&P500".into(), ..kodex200_record() };
    let records = vec![kodex200_record(), second];
    store.save(&records).unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    assert!(text.contains("\"자산운용사\": \"삼성자산운용\""));
    assert!(text.contains("\n        \"1년 수익률\": \"-2.34%\""));

    assert_eq!(store.load().unwrap(), records);
}

#[test]
fn missing_file_is_empty_table() {
    let dir = tmp_dir("store_missing");
    let store = JsonStore::new(dir.join("stock.json"));
    assert!(store.load().unwrap().is_empty());
    assert!(!store.path().exists());
}

#[test]
fn empty_table_writes_brackets() {
    let dir = tmp_dir("store_empty");
    let store = JsonStore::new(dir.join("stock.json"));
    store.save(&[]).unwrap();
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn save_creates_missing_parent_dirs() {
    let dir = tmp_dir("store_parents");
    let store = JsonStore::new(dir.join("a").join("b").join("stock.json"));
    store.save(&[kodex200_record()]).unwrap();
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn garbage_is_corrupt() {
    let dir = tmp_dir("store_garbage");
    let path = dir.join("stock.json");
    fs::write(&path, "{ not json").unwrap();
    let err = JsonStore::new(&path).load().unwrap_err();
    assert!(matches!(err, Error::Corrupt { .. }), "{err:?}");
    assert_eq!(err.label(), "Store unreadable");
}

#[test]
fn zero_byte_file_is_corrupt_not_empty() {
    let dir = tmp_dir("store_zero_byte");
    let path = dir.join("stock.json");
    fs::write(&path, "").unwrap();
    let err = JsonStore::new(&path).load().unwrap_err();
    assert!(matches!(err, Error::Corrupt { .. }), "{err:?}");

    fs::write(&path, "  \n\t").unwrap();
    assert!(matches!(JsonStore::new(&path).load(), Err(Error::Corrupt { .. })));
}

#[test]
fn object_missing_a_key_is_corrupt() {
    let dir = tmp_dir("store_missing_key");
    let path = dir.join("stock.json");
    fs::write(&path, r#"[{"자산운용사": "삼성자산운용", "ETF이름": "KODEX 200"}]"#).unwrap();
    assert!(matches!(JsonStore::new(&path).load(), Err(Error::Corrupt { .. })));
}

#[test]
fn unreadable_path_is_a_read_error() {
    // A directory where the file should be.
    let dir = tmp_dir("store_is_dir");
    let path = dir.join("stock.json");
    fs::create_dir_all(&path).unwrap();
    let err = JsonStore::new(&path).load().unwrap_err();
    assert!(matches!(err, Error::Read { .. }), "{err:?}");
}
