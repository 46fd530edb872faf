use serde::{Serialize, Deserialize};
use tracing::debug;
use super::{FeatureWeight, RevenueModel};
use crate::channel::Channel;
use crate::error::PredictionError;

/// Hypotetické rozpočty na jednotlivé kanály
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpendInput {
    pub tv: f64,
    pub radio: f64,
    pub social: f64,
}

impl SpendInput {
    pub fn new(tv: f64, radio: f64, social: f64) -> Self {
        Self { tv, radio, social }
    }

    /// Hodnoty z formulára; prázdne alebo nečíselné pole je 0
    pub fn parse(tv: &str, radio: &str, social: &str) -> Self {
        Self::new(parse_amount(tv), parse_amount(radio), parse_amount(social))
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Tv => self.tv,
            Channel::Radio => self.radio,
            Channel::Social => self.social,
        }
    }

    /// Kontrola vstupu pred predikciou
    pub fn validate(&self) -> Result<(), PredictionError> {
        if let Some(channel) = Channel::ALL.into_iter().find(|c| self.get(*c) < 0.0) {
            return Err(PredictionError::NegativeSpend {
                channel: channel.label(),
            });
        }
        if Channel::ALL.into_iter().all(|c| self.get(c) == 0.0) {
            return Err(PredictionError::NoSpend);
        }
        Ok(())
    }
}

fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Predikcia tržieb: priemerné tržby upravené o sklon každého kanála
/// váhovaný normalizovanou koreláciou. Výsledok nikdy nie je záporný.
#[derive(Debug, Clone, Copy)]
pub struct Predictor<'a> {
    baseline: f64,
    weights: &'a [FeatureWeight],
}

impl<'a> Predictor<'a> {
    /// `baseline` je priemer tržieb v datasete
    pub fn new(baseline: f64, weights: &'a [FeatureWeight]) -> Self {
        Self { baseline, weights }
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }
}

impl RevenueModel for Predictor<'_> {
    fn get_name(&self) -> &str {
        "Weighted channel regression"
    }

    fn predict(&self, spend: &SpendInput) -> Result<f64, PredictionError> {
        spend.validate()?;

        let adjustment: f64 = self
            .weights
            .iter()
            .map(|w| w.slope * spend.get(w.channel) * w.normalized_weight)
            .sum();
        let predicted = (self.baseline + adjustment).max(0.0);

        debug!(?spend, baseline = self.baseline, predicted, "revenue predicted");
        Ok(predicted)
    }
}
