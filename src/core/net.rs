// src/core/net.rs
//
// Page fetching. One blocking GET per call, no retries. Non-2xx answers are
// not errors: the body is handed on and the extractor decides.

use reqwest::blocking::Client;

use crate::{
    config::options::FetchOptions,
    error::{Error, Result},
};

/// Anything that can turn a URL into page markup.
/// The GUI moves its session to a worker thread, hence `Send`.
pub trait PageSource: Send {
    fn get(&self, url: &str) -> Result<String>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(opts: &FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }

    /// Use a prepared client (tests build one without proxies).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl PageSource for HttpSource {
    fn get(&self, url: &str) -> Result<String> {
        let network = |source| Error::Network { url: s!(url), source };

        logd!("Net: GET {url}");
        let resp = self.client.get(url).send().map_err(network)?;

        let status = resp.status();
        if !status.is_success() {
            logf!("Net: {url} answered {status}; parsing body anyway");
        }

        let body = resp.text().map_err(network)?;
        logd!("Net: {} bytes from {url}", body.len());
        Ok(body)
    }
}
