// src/store.rs
//
// stock.json: the whole table as a JSON array of objects, 4-space indent,
// UTF-8 with Hangul written as-is. Rewritten in full on every save; there is
// no temp-file swap and no backup.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{
    config::consts::JSON_INDENT,
    error::{Error, Result},
    record::Record,
};

pub fn to_json(records: &[Record]) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    records.serialize(&mut ser)?;
    Ok(buf)
}

/// Only a JSON array is a table; blank text is malformed like any other.
pub fn from_json(text: &str) -> serde_json::Result<Vec<Record>> {
    serde_json::from_str(text)
}

#[derive(Clone, Debug)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty table, not an error.
    pub fn load(&self) -> Result<Vec<Record>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                logd!("Store: {} missing, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => return Err(Error::Read { path: self.path.clone(), source }),
        };

        let records = from_json(&text)
            .map_err(|source| Error::Corrupt { path: self.path.clone(), source })?;
        logf!("Store: Loaded {} row(s) from {}", records.len(), self.path.display());
        Ok(records)
    }

    pub fn save(&self, records: &[Record]) -> Result<()> {
        let write_err = |source| Error::Write { path: self.path.clone(), source };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let bytes = to_json(records).map_err(|e| write_err(io::Error::other(e)))?;
        fs::write(&self.path, bytes).map_err(write_err)?;

        logd!("Store: Saved {} row(s) → {}", records.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_is_empty_array() {
        assert_eq!(to_json(&[]).unwrap(), b"[]");
    }

    #[test]
    fn blank_text_is_malformed() {
        assert!(from_json("").is_err());
        assert!(from_json(" \n").is_err());
        assert!(from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn keys_follow_field_order_with_four_space_indent() {
        let r = Record { asset_manager: s!("삼성자산운용"), code: s!("069500"), ..Record::default() };
        let text = String::from_utf8(to_json(&[r]).unwrap()).unwrap();
        assert!(text.starts_with("[\n    {\n        \"자산운용사\": \"삼성자산운용\",\n        \"ETF이름\": \"\","));
        assert!(!text.contains("\\u"));
    }
}
