use serde::{Serialize, Deserialize};
use crate::channel::Channel;
use crate::models::{FeatureWeight, Predictor};
use crate::statistics::{CorrelationStrength, RegressionResult};

/// Metriky jedného kanála voči tržbám
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAnalysis {
    pub channel: Channel,
    pub total: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub correlation: f64,
    pub strength: CorrelationStrength,
    pub regression: RegressionResult,
}

/// Výsledok analýzy jedného datasetu. Po vytvorení sa nemení; nový
/// dataset znamená nový výsledok.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub row_count: usize,
    pub months: Vec<String>,
    pub total_tv_spend: f64,
    pub total_radio_spend: f64,
    pub total_social_spend: f64,
    pub total_spend: f64,
    pub total_revenue: f64,
    /// Percentá, 0 ak sú celkové výdavky 0
    pub roi: f64,
    /// roi / row_count
    pub average_roi: f64,
    pub average_revenue: f64,
    pub revenue_std_dev: f64,
    /// Poradie TV, Radio, Social
    pub channels: Vec<ChannelAnalysis>,
    /// Poradie TV, Radio, Social
    pub weights: Vec<FeatureWeight>,
}

impl AnalysisResult {
    pub fn channel(&self, channel: Channel) -> Option<&ChannelAnalysis> {
        self.channels.iter().find(|c| c.channel == channel)
    }

    pub fn weight(&self, channel: Channel) -> Option<&FeatureWeight> {
        self.weights.iter().find(|w| w.channel == channel)
    }

    /// Prediktor nad váhami tejto analýzy
    pub fn predictor(&self) -> Predictor<'_> {
        Predictor::new(self.average_revenue, &self.weights)
    }
}
