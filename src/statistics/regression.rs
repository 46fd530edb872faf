use serde::{Serialize, Deserialize};
use super::descriptive::{is_constant, mean};

/// Priamka `y = slope·x + intercept` pre jeden prediktor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionResult {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Metóda najmenších štvorcov s jedným prediktorom.
///
/// `slope = Σ(dx·dy) / Σdx²`, `intercept = mean(y) - slope·mean(x)`.
/// Pri konštantnom `x` je sklon 0 a priesečník `mean(y)`.
pub fn linear_regression(x: &[f64], y: &[f64]) -> RegressionResult {
    let mean_x = mean(x);
    let mean_y = mean(y);
    let mut num = 0.0;
    let mut den = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        num += dx * (yi - mean_y);
        den += dx * dx;
    }
    let slope = if den == 0.0 || is_constant(x) { 0.0 } else { num / den };
    RegressionResult {
        slope,
        intercept: mean_y - slope * mean_x,
    }
}
