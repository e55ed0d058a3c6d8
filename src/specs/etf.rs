// src/specs/etf.rs
//
// Naver Finance ETF detail page (`/item/main.naver?code=...`).

use scraper::Html;

use crate::{
    core::{
        html::{self, PathError, Step, first, nth},
        sanitize,
    },
    error::ExtractError,
    record::{Field, Record},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clean {
    Trim,
    /// Trim and remove embedded tabs/newlines.
    TrimDropBreaks,
}

impl Clean {
    pub fn apply(self, raw: &str) -> String {
        match self {
            Clean::Trim           => sanitize::trim(raw),
            Clean::TrimDropBreaks => sanitize::trim_drop_breaks(raw),
        }
    }
}

pub struct FieldSpec {
    pub field: Field,
    pub path: &'static [Step],
    pub clean: Clean,
}

const RETURNS_ROWS: &str = "div#tab_con1 > div:last-child table tr";

/// Where each field lives, in column order.
pub static FIELDS: [FieldSpec; 7] = [
    FieldSpec {
        field: Field::AssetManager,
        path: &[nth("table.tbl_type1", 1), nth("td", 1)],
        clean: Clean::Trim,
    },
    FieldSpec {
        field: Field::Name,
        path: &[first("div.wrap_company h2 a")],
        clean: Clean::Trim,
    },
    FieldSpec {
        field: Field::Code,
        path: &[first("div.description span.code")],
        clean: Clean::Trim,
    },
    FieldSpec {
        field: Field::MarketCap,
        path: &[first("div.first table em#_market_sum")],
        clean: Clean::TrimDropBreaks,
    },
    FieldSpec {
        field: Field::Fee,
        path: &[first("table.tbl_type1 td em")],
        clean: Clean::Trim,
    },
    FieldSpec {
        field: Field::Return6m,
        path: &[nth(RETURNS_ROWS, 2), first("td em")],
        clean: Clean::Trim,
    },
    FieldSpec {
        field: Field::Return1y,
        path: &[nth(RETURNS_ROWS, 3), first("td em")],
        clean: Clean::Trim,
    },
];

pub fn extract(markup: &str) -> Result<Record, ExtractError> {
    let doc = Html::parse_document(markup);
    extract_doc(&doc)
}

pub fn extract_doc(doc: &Html) -> Result<Record, ExtractError> {
    let mut record = Record::default();

    for spec in &FIELDS {
        let el = html::walk(doc, spec.path).map_err(|e| match e {
            PathError::NoMatch(step) => ExtractError::Missing {
                field: spec.field,
                selector: step.css,
                pick: step.pick,
            },
            PathError::BadSelector(step) => ExtractError::BadSelector {
                field: spec.field,
                selector: step.css,
            },
        })?;
        *record.get_mut(spec.field) = spec.clean.apply(&html::text_of(el));
    }

    if record.code.is_empty() {
        return Err(ExtractError::EmptyCode);
    }
    Ok(record)
}
