use serde::{Serialize, Deserialize};
use crate::data_loading::schema::DEFAULT_MIN_ROWS;
use crate::error::{Error, Result};

/// Predvolená kapacita histórie analýz
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Konfigurácia session. Z JS prichádza ako JSON, chýbajúce polia
/// majú predvolené hodnoty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Minimálny počet dátových riadkov, nikdy menej ako [`DEFAULT_MIN_ROWS`]
    pub min_rows: usize,
    /// Koľko snapshotov drží história (najstaršie sa zahadzujú)
    pub history_capacity: usize,
    /// Symbol meny pri formátovaní
    pub currency_symbol: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_rows: DEFAULT_MIN_ROWS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            currency_symbol: "$".to_string(),
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new()
    }

    /// Načíta konfiguráciu z JSON a overí ju
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_json::from_str(json)
            .map_err(|e| Error::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_rows < DEFAULT_MIN_ROWS {
            return Err(Error::invalid_config(format!(
                "minRows must be at least {}",
                DEFAULT_MIN_ROWS
            )));
        }
        if self.history_capacity == 0 {
            return Err(Error::invalid_config("historyCapacity must be at least 1"));
        }
        Ok(())
    }
}

/// Builder pre konfiguráciu session
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfigBuilder {
    min_rows: Option<usize>,
    history_capacity: Option<usize>,
    currency_symbol: Option<String>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nastaví minimálny počet riadkov
    pub fn min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = Some(min_rows);
        self
    }

    /// Nastaví kapacitu histórie
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = Some(capacity);
        self
    }

    pub fn currency_symbol(mut self, symbol: &str) -> Self {
        self.currency_symbol = Some(symbol.to_string());
        self
    }

    /// Vytvorí konfiguráciu s validáciou
    pub fn build(self) -> Result<AnalysisConfig> {
        let defaults = AnalysisConfig::default();
        let config = AnalysisConfig {
            min_rows: self.min_rows.unwrap_or(defaults.min_rows),
            history_capacity: self.history_capacity.unwrap_or(defaults.history_capacity),
            currency_symbol: self.currency_symbol.unwrap_or(defaults.currency_symbol),
        };
        config.validate()?;
        Ok(config)
    }
}
