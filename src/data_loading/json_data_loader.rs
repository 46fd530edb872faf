use super::data_loader::{CellValue, DataLoader, LoadedData, Row};
use crate::error::{Error, Result};
use serde_json::Value;

/// JSON Data Loader - implementácia Strategy pattern pre JSON.
/// Slúži hlavne na obnovu `rawData` z uloženej histórie.
pub struct JsonDataLoader;

impl JsonDataLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parsuje JSON array of objects formát
    /// Príklad: [{"Month": "Jan-2023", "TV_Spend": 5000, ...}, ...]
    fn parse_json_array(&self, json_text: &str) -> Result<LoadedData> {
        let parsed: Value = serde_json::from_str(json_text)
            .map_err(|e| Error::parse(format!("invalid JSON: {}", e)))?;

        let array = parsed
            .as_array()
            .ok_or_else(|| Error::parse("JSON must be an array of objects"))?;

        let Some(first) = array.first() else {
            return Ok(LoadedData::new(Vec::new(), Vec::new()));
        };

        // Získať headers z prvého objektu
        let first_obj = first
            .as_object()
            .ok_or_else(|| Error::parse("first element must be an object"))?;
        let headers: Vec<String> = first_obj.keys().cloned().collect();

        let mut rows = Vec::with_capacity(array.len());
        for (idx, item) in array.iter().enumerate() {
            let obj = item
                .as_object()
                .ok_or_else(|| Error::parse(format!("element {} is not an object", idx)))?;

            let mut row = Row::new();
            for header in &headers {
                let value = match obj.get(header) {
                    None | Some(Value::Null) => CellValue::Missing,
                    Some(Value::Number(n)) => n
                        .as_f64()
                        .filter(|v| v.is_finite())
                        .map(CellValue::Number)
                        .unwrap_or_else(|| CellValue::Text(n.to_string())),
                    // Text prechádza rovnakou konverziou ako pole z CSV
                    Some(Value::String(s)) => CellValue::from_field(s),
                    Some(other) => {
                        return Err(Error::parse(format!(
                            "unsupported value {} for key '{}' in element {}",
                            other, header, idx
                        )))
                    }
                };
                row.insert(header.clone(), value);
            }
            rows.push(row);
        }

        Ok(LoadedData::new(headers, rows))
    }
}

impl DataLoader for JsonDataLoader {
    fn get_name(&self) -> &str {
        "JSON Data Loader"
    }

    fn load_from_string(&self, data: &str) -> Result<LoadedData> {
        self.validate_format(data)?;
        self.parse_json_array(data)
    }

    fn validate_format(&self, data: &str) -> Result<()> {
        let trimmed = data.trim();
        if trimmed.is_empty() {
            return Err(Error::parse("JSON data is empty"));
        }
        if !trimmed.starts_with('[') {
            return Err(Error::parse("JSON must be an array of objects"));
        }
        Ok(())
    }
}

impl Default for JsonDataLoader {
    fn default() -> Self {
        Self::new()
    }
}
