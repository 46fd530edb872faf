use statrs::statistics::Statistics;

/// Súčet hodnôt
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Aritmetický priemer. Pre prázdny vstup vráti `NaN`, volajúci musí
/// zaručiť aspoň jednu hodnotu.
pub fn mean(values: &[f64]) -> f64 {
    sum(values) / values.len() as f64
}

/// Všetky hodnoty sú rovnaké (nulový rozptyl bez ohľadu na zaokrúhlenie priemeru)
pub fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Populačná smerodajná odchýlka (delí sa N, nie N-1)
pub fn standard_deviation(values: &[f64]) -> f64 {
    values.iter().population_std_dev()
}
