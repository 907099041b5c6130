use std::{fmt::Display, path::PathBuf};

use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Currency {
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    // Probe order, which is also the output order.
    pub const ALL: [Currency; 2] = [Currency::Eur, Currency::Gbp];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Region {
    #[serde(rename = "SEK")]
    Sek,
    #[serde(rename = "NOK")]
    Nok,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Sek, Region::Nok];

    pub fn code(&self) -> &'static str {
        match self {
            Region::Sek => "SEK",
            Region::Nok => "NOK",
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Money {
    pub value: String,
    pub currencies: Vec<Currency>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionalAmount {
    pub value: String,
    pub seknok: Vec<Region>,
}

/// A min or max limit, in international and/or Scandinavian currency.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LimitPair {
    pub money: Option<Money>,
    pub seknok: Option<RegionalAmount>,
}

impl LimitPair {
    pub fn is_empty(&self) -> bool {
        self.money.is_none() && self.seknok.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaymentInfo {
    pub title: String,
    pub image: String,
    pub is_deposit: bool,
    pub is_withdraw: bool,
    pub free_fixed: String,
    pub free_percent: String,
    pub min_deposit: LimitPair,
    pub max_deposit: LimitPair,
    pub min_withdrawal: LimitPair,
    pub max_withdrawal: LimitPair,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot read `{path}`: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed CSV: {0}")]
    CsvParse(String),
    #[error("Row {row}: expected at least 9 columns, found {cells}")]
    MalformedRow { row: usize, cells: usize },
    #[error("No numeric value in limit `{0}`")]
    NumericParse(String),
    #[error("Cannot write `{path}`: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Unrecognized file extension: `{0}`")]
    UnsupportedExtension(PathBuf),
    #[error("Error while serializing JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::CsvParse(e.to_string())
    }
}
