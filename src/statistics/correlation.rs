use std::fmt;
use serde::{Serialize, Deserialize};
use super::descriptive::{is_constant, mean};

/// Pearsonov korelačný koeficient.
///
/// `r = Σ(dx·dy) / sqrt(Σdx²·Σdy²)`, kde `dx = x_i - mean(x)`.
/// Ak má niektorý rad nulový rozptyl, vráti presne 0.
pub fn correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.is_empty() || is_constant(x) || is_constant(y) {
        return 0.0;
    }
    let mean_x = mean(x);
    let mean_y = mean(y);
    let mut num = 0.0;
    let mut den_x = 0.0;
    let mut den_y = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        num += dx * dy;
        den_x += dx * dx;
        den_y += dy * dy;
    }
    // Súčin odmocnín, súčin súm štvorcov pretečie už pri hodnotách okolo 1e155
    let den = den_x.sqrt() * den_y.sqrt();
    let r = num / den;
    if den == 0.0 || !r.is_finite() {
        0.0
    } else {
        // Zaokrúhľovanie môže mierne prekročiť ±1
        r.clamp(-1.0, 1.0)
    }
}

/// Slovné hodnotenie sily korelácie podľa |r|. Znamienko sa ignoruje.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CorrelationStrength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl CorrelationStrength {
    /// Dolné hranice pásiem sú inkluzívne
    pub fn classify(r: f64) -> Self {
        let abs = r.abs();
        if abs >= 0.8 {
            Self::VeryStrong
        } else if abs >= 0.6 {
            Self::Strong
        } else if abs >= 0.4 {
            Self::Moderate
        } else if abs >= 0.2 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryStrong => "Very Strong",
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
            Self::VeryWeak => "Very Weak",
        }
    }
}

impl fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perfect_correlations() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y_neg: Vec<f64> = x.iter().map(|v| 10.0 - 2.0 * v).collect();
        assert_relative_eq!(correlation(&x, &x), 1.0, epsilon = 1e-12);
        assert_relative_eq!(correlation(&x, &y_neg), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_variance_is_zero() {
        let x = [1.0, 2.0, 3.0];
        let flat = [7.0, 7.0, 7.0];
        assert_eq!(correlation(&x, &flat), 0.0);
        assert_eq!(correlation(&flat, &x), 0.0);
        assert_eq!(correlation(&[], &[]), 0.0);
        // Priemer 0.1 sa pri sčítaní mierne posunie
        assert_eq!(correlation(&[0.1, 0.1, 0.1], &x), 0.0);
    }

    #[test]
    fn test_large_magnitudes_stay_bounded() {
        // Σdx²·Σdy² by tu pretiekol, súčin odmocnín nie
        let x = [1.0e100, 2.0e100, 3.0e100, 5.0e100];
        assert_relative_eq!(correlation(&x, &x), 1.0, epsilon = 1e-12);

        let huge = [1.0e160, 2.0e160, 3.0e160];
        let r = correlation(&huge, &[3.0e160, 2.0e160, 1.0e160]);
        assert!(r.is_finite());
        assert!((-1.0..=1.0).contains(&r));
    }

    #[test]
    fn test_strength_bands() {
        assert_eq!(CorrelationStrength::classify(0.8), CorrelationStrength::VeryStrong);
        assert_eq!(CorrelationStrength::classify(-0.95), CorrelationStrength::VeryStrong);
        assert_eq!(CorrelationStrength::classify(0.7999), CorrelationStrength::Strong);
        assert_eq!(CorrelationStrength::classify(0.6), CorrelationStrength::Strong);
        assert_eq!(CorrelationStrength::classify(-0.4), CorrelationStrength::Moderate);
        assert_eq!(CorrelationStrength::classify(0.2), CorrelationStrength::Weak);
        assert_eq!(CorrelationStrength::classify(0.1999), CorrelationStrength::VeryWeak);
        assert_eq!(CorrelationStrength::classify(0.0), CorrelationStrength::VeryWeak);
    }

    #[test]
    fn test_labels() {
        assert_eq!(CorrelationStrength::VeryStrong.to_string(), "Very Strong");
        assert_eq!(CorrelationStrength::VeryWeak.label(), "Very Weak");
    }
}
