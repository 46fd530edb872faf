use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use crate::error::Result;

/// Jedna hodnota z tabuľky. Čísla sa rozpoznávajú po poliach, nezávisle
/// od významu stĺpca (vďaka tomu `Month` ako "Jan-2023" ostáva textom).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    /// Riadok mal menej polí ako hlavička
    Missing,
}

impl CellValue {
    /// Konvertuje surové pole: konečné číslo → `Number`, inak `Text`.
    pub fn from_field(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => CellValue::Number(n),
            _ => CellValue::Text(trimmed.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Hodnota tak, ako by sa zobrazila používateľovi v chybovej hláške
    pub fn raw_text(&self) -> String {
        match self {
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Missing => String::new(),
        }
    }
}

/// Riadok tabuľky: názov stĺpca → hodnota
pub type Row = HashMap<String, CellValue>;

/// Výsledok načítania dát (ešte nevalidovaný)
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedData {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl LoadedData {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }
}

/// Strategy pattern pre načítanie dát z rôznych zdrojov
pub trait DataLoader {
    /// Názov loadera
    fn get_name(&self) -> &str;

    /// Načíta hlavičku a riadky zo stringu
    fn load_from_string(&self, data: &str) -> Result<LoadedData>;

    /// Získa dostupné stĺpce (headers) z dát
    fn get_available_columns(&self, data: &str) -> Result<Vec<String>> {
        Ok(self.load_from_string(data)?.headers)
    }

    /// Rýchla kontrola, či dáta vyzerajú ako formát tohto loadera
    fn validate_format(&self, data: &str) -> Result<()>;
}
