use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use crate::analysis::AnalysisResult;
use crate::data_loading::{Dataset, LoadedData, Row};
use crate::error::Result;

/// Záznam do histórie analýz. Serializuje sa do JSON pre úložisko
/// (localStorage a pod.), retenciu rieši až [`crate::session::HistoryLog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySnapshot {
    pub timestamp: DateTime<Utc>,
    pub data_point_count: usize,
    pub total_revenue: f64,
    pub total_spend: f64,
    pub roi: f64,
    /// Poradie stĺpcov zo zdrojového súboru
    #[serde(default)]
    pub headers: Vec<String>,
    pub raw_data: Vec<Row>,
    pub analysis_result: AnalysisResult,
}

impl HistorySnapshot {
    pub fn capture(dataset: &Dataset, analysis: &AnalysisResult, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            data_point_count: dataset.len(),
            total_revenue: analysis.total_revenue,
            total_spend: analysis.total_spend,
            roi: analysis.roi,
            headers: dataset.headers().to_vec(),
            raw_data: dataset.rows().to_vec(),
            analysis_result: analysis.clone(),
        }
    }

    /// Riadky snapshotu pripravené na novú validáciu. Staršie záznamy bez
    /// `headers` použijú kľúče prvého riadku v abecednom poradí.
    pub fn to_loaded_data(&self) -> LoadedData {
        let headers = if self.headers.is_empty() {
            let mut keys: Vec<String> = self
                .raw_data
                .first()
                .map(|row| row.keys().cloned().collect())
                .unwrap_or_default();
            keys.sort();
            keys
        } else {
            self.headers.clone()
        };
        LoadedData::new(headers, self.raw_data.clone())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
