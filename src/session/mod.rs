//! Session drží jediný aktuálny pár dataset + analýza a históriu.
//!
//! Nahradenie je atómové: neúspešné načítanie nechá predchádzajúcu
//! analýzu nedotknutú, úspešné nahradí dataset aj výsledok naraz.

pub mod history;

pub use history::HistoryLog;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use crate::analysis::{Aggregator, AnalysisResult};
use crate::config::AnalysisConfig;
use crate::data_loading::{DataFormat, DataLoader, DataLoaderFactory, Dataset, LoadedData};
use crate::error::{Error, Result};
use crate::models::{RevenueModel, SpendInput};
use crate::report::{format_currency, HistorySnapshot, TextReport};

/// Aktuálny validovaný dataset a jeho analýza
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentAnalysis {
    pub dataset: Dataset,
    pub analysis: AnalysisResult,
}

/// Facade nad celým enginom. Nahrádza globálny stav UI: volajúci ju
/// vlastní a predáva explicitne.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    config: AnalysisConfig,
    current: Option<CurrentAnalysis>,
    history: HistoryLog,
}

impl AnalysisSession {
    pub fn new(config: AnalysisConfig) -> Self {
        let history = HistoryLog::new(config.history_capacity);
        Self {
            config,
            current: None,
            history,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Načíta CSV, zvaliduje ho a spočíta analýzu
    pub fn load_csv(&mut self, text: &str) -> Result<&AnalysisResult> {
        self.load_as(DataFormat::Csv, text)
    }

    /// Načíta JSON pole riadkov (napr. `rawData` z histórie)
    pub fn load_json(&mut self, text: &str) -> Result<&AnalysisResult> {
        self.load_as(DataFormat::Json, text)
    }

    pub fn load_as(&mut self, format: DataFormat, text: &str) -> Result<&AnalysisResult> {
        let loader = DataLoaderFactory::create(format);
        self.load_with(loader.as_ref(), text)
    }

    /// Formát sa určí podľa obsahu
    pub fn load_auto(&mut self, text: &str) -> Result<&AnalysisResult> {
        self.load_as(DataFormat::detect(text)?, text)
    }

    pub fn load_with(&mut self, loader: &dyn DataLoader, text: &str) -> Result<&AnalysisResult> {
        let loaded = loader.load_from_string(text)?;
        info!(
            loader = loader.get_name(),
            rows = loaded.num_rows(),
            columns = loaded.num_columns(),
            "dataset loaded"
        );
        self.install(loaded)
    }

    fn install(&mut self, loaded: LoadedData) -> Result<&AnalysisResult> {
        let dataset = match Dataset::from_loaded(loaded, self.config.min_rows) {
            Ok(dataset) => dataset,
            Err(e) => {
                warn!(error = %e, "dataset rejected");
                return Err(e);
            }
        };

        let analysis = Aggregator::analyze(&dataset);
        info!(
            rows = analysis.row_count,
            total_revenue = analysis.total_revenue,
            roi = analysis.roi,
            "analysis replaced"
        );

        let current = self.current.insert(CurrentAnalysis { dataset, analysis });
        Ok(&current.analysis)
    }

    pub fn current(&self) -> Option<&CurrentAnalysis> {
        self.current.as_ref()
    }

    pub fn dataset(&self) -> Result<&Dataset> {
        self.current
            .as_ref()
            .map(|c| &c.dataset)
            .ok_or(Error::NoActiveAnalysis)
    }

    pub fn analysis(&self) -> Result<&AnalysisResult> {
        self.current
            .as_ref()
            .map(|c| &c.analysis)
            .ok_or(Error::NoActiveAnalysis)
    }

    /// Zahodí aktuálnu analýzu; história ostáva
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn predict(&self, spend: &SpendInput) -> Result<f64> {
        let analysis = self.analysis()?;
        Ok(analysis.predictor().predict(spend)?)
    }

    /// Vstupy z formulára → suma vo formáte meny
    pub fn predict_formatted(&self, tv: &str, radio: &str, social: &str) -> Result<String> {
        let predicted = self.predict(&SpendInput::parse(tv, radio, social))?;
        Ok(format_currency(predicted, &self.config.currency_symbol))
    }

    pub fn report(&self) -> Result<String> {
        let current = self.current.as_ref().ok_or(Error::NoActiveAnalysis)?;
        TextReport::new(&current.dataset, &current.analysis, &self.config.currency_symbol).render()
    }

    pub fn snapshot(&self, timestamp: DateTime<Utc>) -> Result<HistorySnapshot> {
        let current = self.current.as_ref().ok_or(Error::NoActiveAnalysis)?;
        Ok(HistorySnapshot::capture(&current.dataset, &current.analysis, timestamp))
    }

    /// Uloží aktuálnu analýzu do histórie s aktuálnym časom
    pub fn save_to_history(&mut self) -> Result<&HistorySnapshot> {
        let snapshot = self.snapshot(Utc::now())?;
        self.history.push(snapshot);
        info!(entries = self.history.len(), "analysis saved to history");
        self.history.get(0)
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Nahradí históriu, napr. po načítaní z úložiska
    pub fn set_history(&mut self, history: HistoryLog) {
        self.history = history;
    }

    /// Obnoví analýzu z histórie; dáta sa znova validujú a prepočítajú
    pub fn restore(&mut self, index: usize) -> Result<&AnalysisResult> {
        let loaded = self.history.get(index)?.to_loaded_data();
        self.install(loaded)
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
