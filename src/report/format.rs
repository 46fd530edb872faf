/// Suma s oddeľovačom tisícov a dvomi desatinnými miestami, napr. `$84,000.00`
pub fn format_currency(value: f64, symbol: &str) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.00 sa zobrazí bez znamienka
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, grouped, frac_part)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(84000.0, "$"), "$84,000.00");
        assert_eq!(format_currency(1234567.891, "$"), "$1,234,567.89");
        assert_eq!(format_currency(999.999, "€"), "€1,000.00");
        assert_eq!(format_currency(12.5, "$"), "$12.50");
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(-1500.0, "$"), "-$1,500.00");
        assert_eq!(format_currency(-0.001, "$"), "$0.00");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(44.082332761578044), "44.08%");
        assert_eq!(format_percent(-5.0), "-5.00%");
    }
}
