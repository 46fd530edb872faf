use std::fmt::Write as _;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use super::format::{format_currency, format_percent};
use crate::analysis::AnalysisResult;
use crate::data_loading::schema::MONTH_COLUMN;
use crate::data_loading::{CellValue, Dataset};
use crate::error::{Error, Result};

/// Textový report pre stiahnutie. Výstup je deterministický: rovnaký
/// dataset a analýza dajú vždy rovnaký text.
pub struct TextReport<'a> {
    dataset: &'a Dataset,
    analysis: &'a AnalysisResult,
    currency_symbol: &'a str,
}

impl<'a> TextReport<'a> {
    pub fn new(dataset: &'a Dataset, analysis: &'a AnalysisResult, currency_symbol: &'a str) -> Self {
        Self {
            dataset,
            analysis,
            currency_symbol,
        }
    }

    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.write_summary(&mut out)
            .and_then(|_| self.write_correlations(&mut out))
            .and_then(|_| self.write_weights(&mut out))
            .map_err(|e| Error::render(e.to_string()))?;

        out.push_str("RAW DATA\n");
        out.push_str(&self.raw_csv()?);
        Ok(out)
    }

    fn money(&self, value: f64) -> String {
        format_currency(value, self.currency_symbol)
    }

    fn write_summary(&self, out: &mut String) -> std::fmt::Result {
        let a = self.analysis;
        writeln!(out, "MARKETING ANALYTICS REPORT")?;
        writeln!(out, "==========================")?;
        writeln!(out)?;
        writeln!(out, "SUMMARY")?;
        writeln!(out, "Data points: {}", a.row_count)?;
        writeln!(out, "Total Revenue: {}", self.money(a.total_revenue))?;
        writeln!(out, "Total Spend: {}", self.money(a.total_spend))?;
        for channel in &a.channels {
            writeln!(out, "  {} Spend: {}", channel.channel, self.money(channel.total))?;
        }
        writeln!(out, "ROI: {}", format_percent(a.roi))?;
        writeln!(out, "Average ROI: {}", format_percent(a.average_roi))?;
        writeln!(out, "Average Revenue: {}", self.money(a.average_revenue))?;
        writeln!(out)
    }

    fn write_correlations(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "CORRELATION WITH REVENUE")?;
        for channel in &self.analysis.channels {
            writeln!(
                out,
                "{}: {:.3} ({})",
                channel.channel, channel.correlation, channel.strength
            )?;
        }
        writeln!(out)
    }

    fn write_weights(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "REGRESSION WEIGHTS")?;
        for w in &self.analysis.weights {
            writeln!(
                out,
                "{}: slope {:.4}, weight {:.4}",
                w.channel, w.slope, w.normalized_weight
            )?;
        }
        writeln!(out)
    }

    /// Pôvodné riadky ako CSV: čísla na dve desatinné miesta, text a `Month` bez zmeny
    fn raw_csv(&self) -> Result<String> {
        let mut wtr = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        let headers = self.dataset.headers();
        wtr.write_record(headers)
            .map_err(|e| Error::render(e.to_string()))?;

        for row in self.dataset.rows() {
            let fields = headers.iter().map(|h| match row.get(h) {
                // Month ostáva tak, ako bol v súbore, aj keď je číselný
                Some(value) if h.as_str() == MONTH_COLUMN => value.raw_text(),
                Some(CellValue::Number(n)) => format!("{:.2}", n),
                Some(other) => other.raw_text(),
                None => String::new(),
            });
            wtr.write_record(fields)
                .map_err(|e| Error::render(e.to_string()))?;
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| Error::render(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| Error::render(e.to_string()))
    }
}
