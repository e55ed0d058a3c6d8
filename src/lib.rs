// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;

pub mod data;
pub mod error;
pub mod gui;
pub mod progress;
pub mod record;
pub mod session;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
