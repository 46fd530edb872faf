//! Analýza výdavkov na reklamu (TV, rádio, sociálne siete) voči tržbám.
//!
//! CSV → validácia → štatistiky, korelácie a vážená regresia → výsledok,
//! ktorý používa predikcia, textový report aj história.

pub mod analysis;
pub mod channel;
pub mod config;
pub mod data_loading;
pub mod error;
pub mod models;
pub mod report;
pub mod session;
pub mod statistics;
pub mod wasm_api;

pub use analysis::{Aggregator, AnalysisResult, ChannelAnalysis};
pub use channel::Channel;
pub use config::{AnalysisConfig, AnalysisConfigBuilder};
pub use data_loading::{CellValue, CsvDataLoader, DataFormat, DataLoader, Dataset, LoadedData, Row};
pub use error::{Error, PredictionError, Result};
pub use models::{FeatureWeight, Predictor, RevenueModel, SpendInput, WeightedRegressor};
pub use report::{HistorySnapshot, TextReport};
pub use session::{AnalysisSession, HistoryLog};
pub use statistics::{correlation, linear_regression, mean, standard_deviation, CorrelationStrength, RegressionResult};
pub use wasm_api::WasmAnalysisSession;
