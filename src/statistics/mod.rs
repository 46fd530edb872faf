//! Štatistické primitíva nad číselnými radmi.
//!
//! Čisté funkcie bez stavu. Nulový rozptyl nikdy nevedie k `NaN`:
//! korelácia aj sklon regresie sú v takom prípade 0.

pub mod descriptive;
pub mod correlation;
pub mod regression;

pub use descriptive::{is_constant, mean, standard_deviation, sum};
pub use correlation::{correlation, CorrelationStrength};
pub use regression::{linear_regression, RegressionResult};
