// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub store: StoreOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Detail page; re-fetch URLs are `<base_url>?code=<code>`.
    pub base_url: String,
    /// Used when the URL box is left empty.
    pub default_url: String,
    pub user_agent: String,
    /// None = wait for the server as long as it takes.
    pub timeout: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            default_url: join!(BASE_URL, "?code=", DEFAULT_CODE),
            user_agent: s!(USER_AGENT),
            timeout: None,
        }
    }
}

impl FetchOptions {
    pub fn url_for_code(&self, code: &str) -> String {
        join!(&self.base_url, "?code=", code.trim())
    }

    /// User input → URL to fetch. Blank input means the default page.
    pub fn resolve_url(&self, input: &str) -> String {
        let s = input.trim();
        if s.is_empty() { self.default_url.clone() } else { s!(s) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    path: PathBuf,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { path: program_dir().join(STORE_FILE) }
    }
}

impl StoreOptions {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Debug log lives next to the store file.
    pub fn log_path(&self) -> PathBuf {
        let dir = self.path.parent().unwrap_or(Path::new("."));
        dir.join(LOG_DIR).join(LOG_FILE)
    }
}

/// Directory of the running executable, or the working directory if that
/// cannot be determined.
pub fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_falls_back_to_default_url() {
        let opts = FetchOptions::default();
        assert_eq!(opts.resolve_url("   "), "https://finance.naver.com/item/main.naver?code=459580");
        assert_eq!(opts.resolve_url(" https://x/y?code=1 "), "https://x/y?code=1");
    }

    #[test]
    fn code_url_uses_template() {
        let opts = FetchOptions::default();
        assert_eq!(opts.url_for_code("069500"), "https://finance.naver.com/item/main.naver?code=069500");
    }

    #[test]
    fn log_sits_beside_store() {
        let opts = StoreOptions::at("data/stock.json");
        assert_eq!(opts.log_path(), Path::new("data").join(".store").join("debug.log"));
    }
}
