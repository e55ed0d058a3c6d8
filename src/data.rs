// src/data.rs
//
// The in-memory table: an ordered list of records.
//
// - Duplicates are allowed. Fetch always appends; only the bulk update
//   rewrites rows, and it does so by position.
// - The first record to arrive fixes the column schema for the session.
// - Persisting is the caller's job (see `session::Session`), except that
//   the bulk update hands each intermediate state to a commit callback.

use crate::{
    error::{Error, Result},
    record::{Field, Record},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
    schema: Option<&'static [Field]>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from loaded records. A non-empty list establishes the schema.
    pub fn from_records(records: Vec<Record>) -> Self {
        let schema: Option<&'static [Field]> = if records.is_empty() { None } else { Some(&Field::ALL) };
        Self { records, schema }
    }

    pub fn records(&self) -> &[Record] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn get(&self, pos: usize) -> Option<&Record> { self.records.get(pos) }

    /// Column order, once the first record has arrived.
    pub fn schema(&self) -> Option<&'static [Field]> {
        self.schema
    }

    /// Column order for display; the fixed field order before any record exists.
    pub fn columns(&self) -> &'static [Field] {
        self.schema.unwrap_or(&Field::ALL)
    }

    /// Add to the end. Returns the new row's position.
    pub fn append(&mut self, record: Record) -> usize {
        if self.schema.is_none() {
            self.schema = Some(&Field::ALL);
        }
        self.records.push(record);
        self.records.len() - 1
    }

    /// Set one cell. False if the row does not exist.
    pub fn set_field(&mut self, pos: usize, field: Field, value: &str) -> bool {
        match self.records.get_mut(pos) {
            Some(r) => { *r.get_mut(field) = s!(value); true }
            None => false,
        }
    }

    /// Remove rows by position. Positions may come in any order and may repeat;
    /// ones past the end are ignored. Returns how many rows went away.
    pub fn delete(&mut self, positions: &[usize]) -> usize {
        let mut ps: Vec<usize> = positions.iter().copied().filter(|&p| p < self.records.len()).collect();
        ps.sort_unstable();
        ps.dedup();

        // Highest first so earlier positions stay valid.
        for &p in ps.iter().rev() {
            self.records.remove(p);
        }
        ps.len()
    }

    /// Re-scrape every row in order and overwrite it in place.
    ///
    /// `refetch(position, code)` produces the fresh record; `commit(self)` runs
    /// after each overwrite (the session saves there). The first failure
    /// stops the run: rows before it keep their new values (already
    /// committed), it and the rows after it keep their old ones. Returns the
    /// number of rows refreshed.
    pub fn replace_all_by_refetch<R, C>(&mut self, mut refetch: R, mut commit: C) -> Result<usize>
    where
        R: FnMut(usize, &str) -> Result<Record>,
        C: FnMut(&RecordStore) -> Result<()>,
    {
        for pos in 0..self.records.len() {
            let code = self.records[pos].code.clone();

            let fresh = refetch(pos, &code).map_err(|e| Error::PartialUpdate {
                position: pos,
                updated: pos,
                source: Box::new(e),
            })?;
            self.records[pos] = fresh;

            commit(self).map_err(|e| Error::PartialUpdate {
                position: pos,
                updated: pos + 1,
                source: Box::new(e),
            })?;
        }
        Ok(self.records.len())
    }

    /// Reset the URL input. Takes `&self`: the table is never touched.
    pub fn clear_input_only(&self, input: &mut String) {
        input.clear();
    }
}
