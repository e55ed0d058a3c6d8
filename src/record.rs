// src/record.rs
//
// One scraped ETF snapshot. Field order here is the column order on screen
// and the key order in stock.json; the JSON keys are the Korean headers the
// file has always used.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    AssetManager,
    Name,
    Code,
    MarketCap,
    Fee,
    Return6m,
    Return1y,
}

use Field::*;

impl Field {
    pub const ALL: [Field; 7] = [AssetManager, Name, Code, MarketCap, Fee, Return6m, Return1y];

    /// Key in the persisted JSON objects.
    pub fn key(self) -> &'static str {
        match self {
            AssetManager => "자산운용사",
            Name         => "ETF이름",
            Code         => "종목코드",
            MarketCap    => "시가총액",
            Fee          => "펀드보수",
            Return6m     => "6개월 수익률",
            Return1y     => "1년 수익률",
        }
    }

    /// Column header shown in the table.
    pub fn label(self) -> &'static str {
        match self {
            AssetManager => "Asset manager",
            Name         => "ETF name",
            Code         => "Code",
            MarketCap    => "Market cap",
            Fee          => "Fee",
            Return6m     => "6M return",
            Return1y     => "1Y return",
        }
    }

    /// Formatted numbers; rendered right-aligned in fixed-width columns.
    pub fn is_numeric(self) -> bool {
        matches!(self, MarketCap | Fee | Return6m | Return1y)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "자산운용사")]
    pub asset_manager: String,
    #[serde(rename = "ETF이름")]
    pub name: String,
    #[serde(rename = "종목코드")]
    pub code: String,
    #[serde(rename = "시가총액")]
    pub market_cap: String,
    #[serde(rename = "펀드보수")]
    pub fee: String,
    #[serde(rename = "6개월 수익률")]
    pub return_6m: String,
    #[serde(rename = "1년 수익률")]
    pub return_1y: String,
}

impl Record {
    pub fn get(&self, field: Field) -> &str {
        match field {
            AssetManager => &self.asset_manager,
            Name         => &self.name,
            Code         => &self.code,
            MarketCap    => &self.market_cap,
            Fee          => &self.fee,
            Return6m     => &self.return_6m,
            Return1y     => &self.return_1y,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            AssetManager => &mut self.asset_manager,
            Name         => &mut self.name,
            Code         => &mut self.code,
            MarketCap    => &mut self.market_cap,
            Fee          => &mut self.fee,
            Return6m     => &mut self.return_6m,
            Return1y     => &mut self.return_1y,
        }
    }

    /// Cell texts in column order.
    pub fn cells(&self) -> [&str; 7] {
        Field::ALL.map(|f| self.get(f))
    }
}
