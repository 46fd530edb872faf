use serde::{Serialize, Deserialize};
use crate::channel::Channel;
use crate::statistics::{correlation, linear_regression};

/// Váha jedného kanála v ansámbli
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureWeight {
    pub channel: Channel,
    pub slope: f64,
    pub correlation: f64,
    /// |correlation|
    pub weight: f64,
    /// weight / Σweight, 0 ak sú všetky váhy nulové
    pub normalized_weight: f64,
}

/// "Viacnásobná" regresia ako vážená kombinácia nezávislých jednorozmerných
/// fitov. Každý kanál sa regresuje na tržby samostatne, kolinearita medzi
/// kanálmi sa nekoriguje. Nejde o spoločný fit metódou najmenších štvorcov.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedRegressor {
    weights: Vec<FeatureWeight>,
}

impl WeightedRegressor {
    /// `features` sú v pevnom poradí, výsledné váhy ho zachovajú
    pub fn fit(features: &[(Channel, &[f64])], target: &[f64]) -> Self {
        let mut weights: Vec<FeatureWeight> = features
            .iter()
            .map(|(channel, series)| {
                let r = correlation(series, target);
                FeatureWeight {
                    channel: *channel,
                    slope: linear_regression(series, target).slope,
                    correlation: r,
                    weight: r.abs(),
                    normalized_weight: 0.0,
                }
            })
            .collect();

        let total: f64 = weights.iter().map(|w| w.weight).sum();
        if total > 0.0 {
            for w in &mut weights {
                w.normalized_weight = w.weight / total;
            }
        }

        Self { weights }
    }

    pub fn weights(&self) -> &[FeatureWeight] {
        &self.weights
    }

    pub fn into_weights(self) -> Vec<FeatureWeight> {
        self.weights
    }
}
