use super::data_loader::{CellValue, DataLoader, LoadedData, Row};
use crate::error::{Error, Result};
use csv::{ReaderBuilder, StringRecord};

/// CSV Data Loader - implementácia Strategy pattern pre CSV súbory.
///
/// Zámerne naivný formát: polia sa delia len čiarkou, úvodzovky nemajú
/// žiadny špeciálny význam. Pole s čiarkou sa teda rozdelí na dve.
pub struct CsvDataLoader;

impl CsvDataLoader {
    pub fn new() -> Self {
        Self
    }

    /// Prázdny riadok (aj riadok iba s medzerami) sa vynecháva
    fn is_blank(record: &StringRecord) -> bool {
        record.len() == 1 && record.get(0).map_or(true, str::is_empty)
    }

    /// Spojí hodnoty riadku s hlavičkou podľa pozície
    fn zip_row(headers: &[String], record: &StringRecord) -> Row {
        headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let value = record
                    .get(i)
                    .map(CellValue::from_field)
                    .unwrap_or(CellValue::Missing);
                (header.clone(), value)
            })
            .collect()
    }
}

impl DataLoader for CsvDataLoader {
    fn get_name(&self) -> &str {
        "CSV Data Loader"
    }

    fn load_from_string(&self, data: &str) -> Result<LoadedData> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes());

        let mut headers: Option<Vec<String>> = None;
        let mut rows = Vec::new();

        for record in rdr.records() {
            let record = record?;
            if Self::is_blank(&record) {
                continue;
            }

            if let Some(h) = &headers {
                rows.push(Self::zip_row(h, &record));
            } else {
                headers = Some(record.iter().map(|s| s.to_string()).collect());
            }
        }

        Ok(LoadedData::new(headers.unwrap_or_default(), rows))
    }

    fn validate_format(&self, data: &str) -> Result<()> {
        if data.trim().is_empty() {
            return Err(Error::parse("CSV data is empty"));
        }

        // Hlavička musí mať aspoň jeden oddeľovač
        let header = data.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
        if !header.contains(',') {
            return Err(Error::parse("CSV header must contain comma-separated column names"));
        }

        Ok(())
    }
}

impl Default for CsvDataLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Month,TV_Spend,Radio_Spend,SocialMedia_Spend,Sales_Revenue\n\
                          Jan-2023,5000,3000,2500,15000\n\
                          Feb-2023,5500,3200,2600,16000\n";

    #[test]
    fn test_headers_and_rows() {
        let loaded = CsvDataLoader::new().load_from_string(SAMPLE).unwrap();
        assert_eq!(
            loaded.headers,
            vec!["Month", "TV_Spend", "Radio_Spend", "SocialMedia_Spend", "Sales_Revenue"]
        );
        assert_eq!(loaded.num_rows(), 2);
        assert_eq!(loaded.rows[0]["Month"], CellValue::Text("Jan-2023".to_string()));
        assert_eq!(loaded.rows[1]["TV_Spend"], CellValue::Number(5500.0));
        let columns = CsvDataLoader::new().get_available_columns(SAMPLE).unwrap();
        assert_eq!(columns, loaded.headers);
    }

    #[test]
    fn test_blank_lines_and_whitespace() {
        let text = "\n  A , B \n\n   \n 1 , x \r\n\n2,3\n";
        let loaded = CsvDataLoader::new().load_from_string(text).unwrap();
        assert_eq!(loaded.headers, vec!["A", "B"]);
        assert_eq!(loaded.num_rows(), 2);
        assert_eq!(loaded.rows[0]["A"], CellValue::Number(1.0));
        assert_eq!(loaded.rows[0]["B"], CellValue::Text("x".to_string()));
        assert_eq!(loaded.rows[1]["B"], CellValue::Number(3.0));
    }

    #[test]
    fn test_short_and_long_rows() {
        let text = "A,B,C\n1\n1,2,3,4\n";
        let loaded = CsvDataLoader::new().load_from_string(text).unwrap();
        assert_eq!(loaded.rows[0]["B"], CellValue::Missing);
        assert_eq!(loaded.rows[0]["C"], CellValue::Missing);
        assert_eq!(loaded.rows[1].len(), 3);
        assert_eq!(loaded.rows[1]["C"], CellValue::Number(3.0));
    }

    #[test]
    fn test_quotes_are_not_special() {
        let text = "Month,TV_Spend\n\"Jan, 2023\",5000\n";
        let loaded = CsvDataLoader::new().load_from_string(text).unwrap();
        // Čiarka v úvodzovkách rozdelí pole
        assert_eq!(loaded.rows[0]["Month"], CellValue::Text("\"Jan".to_string()));
        assert_eq!(loaded.rows[0]["TV_Spend"], CellValue::Text("2023\"".to_string()));
    }

    #[test]
    fn test_empty_input() {
        let loaded = CsvDataLoader::new().load_from_string("").unwrap();
        assert!(loaded.headers.is_empty());
        assert!(loaded.rows.is_empty());
    }

    #[test]
    fn test_validate_format() {
        let loader = CsvDataLoader::new();
        assert!(loader.validate_format(SAMPLE).is_ok());
        assert!(loader.validate_format("   \n").is_err());
        assert!(loader.validate_format("just one column\n1\n").is_err());
    }
}
