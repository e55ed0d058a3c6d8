// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

use crate::{core::html::Pick, record::Field};

/// A field could not be read from the page.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{field}: no {pick} match for `{selector}`")]
    Missing {
        field: Field,
        selector: &'static str,
        pick: Pick,
    },

    #[error("{field}: invalid selector `{selector}`")]
    BadSelector { field: Field, selector: &'static str },

    #[error("instrument code is empty")]
    EmptyCode,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not set up HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not read {url}: {source}")]
    Extraction {
        url: String,
        #[source]
        source: ExtractError,
    },

    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a valid store: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("stopped at row {} with {updated} row(s) refreshed: {source}", position + 1)]
    PartialUpdate {
        position: usize,
        updated: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Short name of the failure class, for status lines.
    pub fn label(&self) -> &'static str {
        match self {
            Error::Client(_)             => "Setup failed",
            Error::Network { .. }        => "Network error",
            Error::Extraction { .. }     => "Extraction failed",
            Error::Read { .. }           => "Load failed",
            Error::Corrupt { .. }        => "Store unreadable",
            Error::Write { .. }          => "Save failed",
            Error::PartialUpdate { .. }  => "Update incomplete",
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network { .. })
    }

    pub fn is_extraction(&self) -> bool {
        matches!(self, Error::Extraction { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
