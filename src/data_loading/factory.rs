use std::fmt;
use std::str::FromStr;
use super::data_loader::DataLoader;
use super::csv_data_loader::CsvDataLoader;
use super::json_data_loader::JsonDataLoader;
use crate::error::{Error, Result};

/// Formát vstupných dát
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    /// Pole objektov, napr. `rawData` zo snapshotu
    Json,
}

impl DataFormat {
    /// Odhadne formát podľa obsahu: JSON pole objektov, inak CSV
    pub fn detect(data: &str) -> Result<Self> {
        let trimmed = data.trim();
        if trimmed.starts_with('[') && trimmed.contains('{') {
            Ok(DataFormat::Json)
        } else if trimmed.contains(',') || trimmed.contains('\n') {
            Ok(DataFormat::Csv)
        } else {
            Err(Error::UnknownFormat {
                format: "auto".to_string(),
            })
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataFormat::Csv => "csv",
            DataFormat::Json => "json",
        }
    }
}

impl FromStr for DataFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(DataFormat::Csv),
            "json" => Ok(DataFormat::Json),
            _ => Err(Error::UnknownFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Factory pre loadery podľa formátu
pub struct DataLoaderFactory;

impl DataLoaderFactory {
    pub fn create(format: DataFormat) -> Box<dyn DataLoader> {
        match format {
            DataFormat::Csv => Box::new(CsvDataLoader::new()),
            DataFormat::Json => Box::new(JsonDataLoader::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_name() {
        assert_eq!(" CSV ".parse::<DataFormat>().unwrap(), DataFormat::Csv);
        assert_eq!("json".parse::<DataFormat>().unwrap(), DataFormat::Json);
        assert_eq!(
            "xlsx".parse::<DataFormat>().unwrap_err(),
            Error::UnknownFormat {
                format: "xlsx".to_string()
            }
        );
        assert_eq!(DataFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_create_matches_format() {
        assert_eq!(DataLoaderFactory::create(DataFormat::Csv).get_name(), "CSV Data Loader");
        assert_eq!(DataLoaderFactory::create(DataFormat::Json).get_name(), "JSON Data Loader");
    }

    #[test]
    fn test_detect() {
        assert_eq!(DataFormat::detect("a,b\n1,2").unwrap(), DataFormat::Csv);
        assert_eq!(DataFormat::detect(r#" [{"a": 1}] "#).unwrap(), DataFormat::Json);
        assert!(DataFormat::detect("hello").is_err());
    }
}
