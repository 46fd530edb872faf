//! Validácia schémy a validovaný dataset.
//!
//! Poradie kontrol je pevné, aby boli chybové hlášky reprodukovateľné:
//! najprv chýbajúce stĺpce, potom počet riadkov, nakoniec čísla.

use super::data_loader::{CellValue, LoadedData, Row};
use crate::error::{Error, Result};

pub const MONTH_COLUMN: &str = "Month";
pub const TV_COLUMN: &str = "TV_Spend";
pub const RADIO_COLUMN: &str = "Radio_Spend";
pub const SOCIAL_COLUMN: &str = "SocialMedia_Spend";
pub const REVENUE_COLUMN: &str = "Sales_Revenue";

/// Povinné stĺpce v poradí, v akom sa hlásia chýbajúce
pub const REQUIRED_COLUMNS: [&str; 5] = [
    MONTH_COLUMN,
    TV_COLUMN,
    RADIO_COLUMN,
    SOCIAL_COLUMN,
    REVENUE_COLUMN,
];

/// Číselné stĺpce v poradí kontroly hodnôt
pub const NUMERIC_COLUMNS: [&str; 4] = [TV_COLUMN, RADIO_COLUMN, SOCIAL_COLUMN, REVENUE_COLUMN];

/// Predvolený minimálny počet dátových riadkov
pub const DEFAULT_MIN_ROWS: usize = 3;

/// Overí hlavičku a riadky. `min_rows` pod [`DEFAULT_MIN_ROWS`] sa ignoruje,
/// dataset má vždy aspoň tri riadky.
pub fn validate(headers: &[String], rows: &[Row], min_rows: usize) -> Result<()> {
    let min_rows = min_rows.max(DEFAULT_MIN_ROWS);

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h.as_str() == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingColumns { columns: missing });
    }

    if rows.len() < min_rows {
        return Err(Error::InsufficientRows {
            found: rows.len(),
            required: min_rows,
        });
    }

    for (idx, row) in rows.iter().enumerate() {
        for column in NUMERIC_COLUMNS {
            let value = row.get(column);
            if value.and_then(CellValue::as_number).is_none() {
                return Err(Error::InvalidNumericValue {
                    row: idx + 1,
                    column: column.to_string(),
                    value: value.map(CellValue::raw_text).unwrap_or_default(),
                });
            }
        }
    }

    Ok(())
}

/// Validovaný dataset. Vzniká iba cez [`Dataset::from_loaded`], takže
/// všetky číselné stĺpce sú v každom riadku čísla.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn from_loaded(loaded: LoadedData, min_rows: usize) -> Result<Self> {
        validate(&loaded.headers, &loaded.rows, min_rows)?;
        Ok(Self {
            headers: loaded.headers,
            rows: loaded.rows,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Hodnoty číselného stĺpca v poradí riadkov
    pub fn numeric_column(&self, column: &str) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.get(column).and_then(CellValue::as_number))
            .collect()
    }

    /// Hodnoty stĺpca ako text (pre `Month`)
    pub fn text_column(&self, column: &str) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.get(column).map(CellValue::raw_text).unwrap_or_default())
            .collect()
    }
}
