// src/session.rs
//
// The controller both frontends drive. Owns the table, its file, and the page
// source; every mutating call ends with a full save.

use crate::{
    config::options::{AppOptions, FetchOptions},
    core::net::PageSource,
    data::RecordStore,
    error::{Error, Result},
    progress::Progress,
    record::{Field, Record},
    specs::etf,
    store::JsonStore,
};

pub struct Session {
    store: RecordStore,
    storage: JsonStore,
    source: Box<dyn PageSource>,
    fetch: FetchOptions,
}

/// GET `url` and read the seven fields from it. Touches nothing else.
pub fn scrape(source: &dyn PageSource, url: &str) -> Result<Record> {
    let markup = source.get(url)?;
    etf::extract(&markup).map_err(|source| Error::Extraction { url: s!(url), source })
}

impl Session {
    pub fn new(store: RecordStore, storage: JsonStore, source: Box<dyn PageSource>, fetch: FetchOptions) -> Self {
        Self { store, storage, source, fetch }
    }

    /// Load the table from disk. A load failure is handed back next to an
    /// empty session so the caller can report it and carry on.
    pub fn open(options: &AppOptions, source: Box<dyn PageSource>) -> (Self, Option<Error>) {
        let storage = JsonStore::new(options.store.path());

        let (records, load_error) = match storage.load() {
            Ok(records) => (records, None),
            Err(e) => {
                loge!("Store: {e}");
                (Vec::new(), Some(e))
            }
        };

        let session = Self::new(RecordStore::from_records(records), storage, source, options.fetch.clone());
        (session, load_error)
    }

    pub fn store(&self) -> &RecordStore { &self.store }

    pub fn save(&self) -> Result<()> {
        self.storage.save(self.store.records())
    }

    /// Scrape `input` (or the default page when blank) and append the result.
    /// Returns the new row's position. Network and extraction failures leave
    /// the table and file as they were; a save failure keeps the new row.
    pub fn fetch(&mut self, input: &str) -> Result<usize> {
        let url = self.fetch.resolve_url(input);
        logf!("Fetch: Begin {url}");

        let record = scrape(&*self.source, &url)?;
        logf!("Fetch: OK {} ({})", record.name, record.code);

        let pos = self.store.append(record);
        self.save()?;
        Ok(pos)
    }

    /// Re-scrape every row by its code and overwrite it in place, saving after
    /// each row. Stops at the first failure (see `RecordStore::replace_all_by_refetch`).
    pub fn update_all(&mut self, progress: Option<&mut dyn Progress>) -> Result<usize> {
        let mut progress = progress;
        let source = &*self.source;
        let fetch = &self.fetch;
        let storage = &self.storage;

        logf!("Update: Begin rows={}", self.store.len());
        if let Some(p) = progress.as_deref_mut() {
            p.begin(self.store.len());
            p.log(&format!("Updating {} row(s)…", self.store.len()));
        }

        let result = self.store.replace_all_by_refetch(
            |pos, code| {
                let url = fetch.url_for_code(code);
                match scrape(source, &url) {
                    Ok(r) => {
                        if let Some(p) = progress.as_deref_mut() { p.item_done(pos, code); }
                        Ok(r)
                    }
                    Err(e) => {
                        if let Some(p) = progress.as_deref_mut() { p.item_failed(pos, code); }
                        Err(e)
                    }
                }
            },
            |store| storage.save(store.records()),
        );

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        match &result {
            Ok(n) => logf!("Update: OK rows={n}"),
            Err(e) => loge!("Update: {e}"),
        }
        result
    }

    /// Delete rows by position and save. Returns how many were removed.
    pub fn delete(&mut self, positions: &[usize]) -> Result<usize> {
        let removed = self.store.delete(positions);
        logf!("Delete: positions={positions:?} removed={removed}");
        self.save()?;
        Ok(removed)
    }

    /// Change one cell and save. False (and no save) if the row is gone or
    /// the value is unchanged.
    pub fn edit(&mut self, pos: usize, field: Field, value: &str) -> Result<bool> {
        if self.store.get(pos).is_none_or(|r| r.get(field) == value) {
            return Ok(false);
        }
        self.store.set_field(pos, field, value);
        logd!("Edit: row={pos} {field:?} → {value:?}");
        self.save()?;
        Ok(true)
    }

    /// Reset the URL input. Neither the table nor the file changes.
    pub fn clear_input(&self, input: &mut String) {
        self.store.clear_input_only(input);
        logd!("Clear: input reset");
    }
}
