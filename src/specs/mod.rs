//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec covers a single page and
//! encodes *where the ground truth lives in the HTML* as data: a table from
//! field to selector path (see `core::html::Step`).
//!
//! ## What lives here
//! - **Pure HTML parsing** of a fetched page into a `Record`.
//! - **Selector paths & cleanup rules** per field. When the site moves things
//!   around, the fix is an edit to the table, not to control flow.
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`), **persistence** (`store`), or the in-memory
//!   table (`data::RecordStore`). Those are driven by `session::Session`.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → Session::fetch → PageSource::get → specs::etf::extract
//!                           ↘ RecordStore::append → JsonStore::save
//! ```
//!
//! ## Conventions & invariants
//! - Any path step that matches nothing fails the **whole** extraction; there
//!   are no partial records and no default values.
//! - Specs are testable **offline** against saved HTML (`tests/fixtures`).
pub mod etf;
