// tests/common/mod.rs
#![allow(dead_code)]

use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use etf_view::{
    config::options::{AppOptions, FetchOptions, StoreOptions},
    core::PageSource,
    record::Record,
};

pub const KODEX200: &str = include_str!("../fixtures/kodex200.html");

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("etf_view_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

pub fn options_in(dir: &PathBuf) -> AppOptions {
    AppOptions { fetch: FetchOptions::default(), store: StoreOptions::at(dir.join("stock.json")) }
}

/// The fixture page with its identifying cells swapped out.
pub fn page(code: &str, name: &str, manager: &str, return_6m: &str) -> String {
    KODEX200
        .replace("069500", code)
        .replace("KODEX 200", name)
        .replace("삼성자산운용", manager)
        .replace("+9.87%", return_6m)
}

pub fn kodex200_record() -> Record {
    Record {
        asset_manager: "삼성자산운용".into(),
        name: "KODEX 200".into(),
        code: "069500".into(),
        market_cap: "6조5,104".into(),
        fee: "0.150%".into(),
        return_6m: "+9.87%".into(),
        return_1y: "-2.34%".into(),
    }
}

/// Serves canned pages by exact URL. Unknown URLs get a bare page, like a
/// site's "not found" body, which then fails extraction.
#[derive(Clone, Default)]
pub struct FixtureSource {
    pages: Arc<Mutex<HashMap<String, String>>>,
    hits: Arc<Mutex<Vec<String>>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(&self, url: impl Into<String>, body: impl Into<String>) {
        self.pages.lock().unwrap().insert(url.into(), body.into());
    }

    pub fn unserve(&self, url: &str) {
        self.pages.lock().unwrap().remove(url);
    }

    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

impl PageSource for FixtureSource {
    fn get(&self, url: &str) -> etf_view::Result<String> {
        self.hits.lock().unwrap().push(url.to_string());
        Ok(self
            .pages
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| "<html><body><p>페이지를 찾을 수 없습니다</p></body></html>".to_string()))
    }
}
