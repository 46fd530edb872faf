use tracing::debug;
use super::result::{AnalysisResult, ChannelAnalysis};
use crate::channel::Channel;
use crate::data_loading::schema::{Dataset, MONTH_COLUMN, REVENUE_COLUMN};
use crate::models::WeightedRegressor;
use crate::statistics::{
    correlation, linear_regression, mean, standard_deviation, sum, CorrelationStrength,
};

/// ROI v percentách; pri nulových výdavkoch 0
pub fn roi(total_revenue: f64, total_spend: f64) -> f64 {
    if total_spend == 0.0 {
        0.0
    } else {
        (total_revenue - total_spend) / total_spend * 100.0
    }
}

/// Spočíta všetky odvodené metriky pre jeden validovaný dataset
pub struct Aggregator;

impl Aggregator {
    pub fn analyze(dataset: &Dataset) -> AnalysisResult {
        let revenue = dataset.numeric_column(REVENUE_COLUMN);
        let series: Vec<(Channel, Vec<f64>)> = Channel::ALL
            .iter()
            .map(|c| (*c, dataset.numeric_column(c.column())))
            .collect();

        let channels: Vec<ChannelAnalysis> = series
            .iter()
            .map(|(channel, values)| {
                let r = correlation(values, &revenue);
                ChannelAnalysis {
                    channel: *channel,
                    total: sum(values),
                    mean: mean(values),
                    std_dev: standard_deviation(values),
                    correlation: r,
                    strength: CorrelationStrength::classify(r),
                    regression: linear_regression(values, &revenue),
                }
            })
            .collect();

        let features: Vec<(Channel, &[f64])> = series
            .iter()
            .map(|(channel, values)| (*channel, values.as_slice()))
            .collect();
        let weights = WeightedRegressor::fit(&features, &revenue).into_weights();

        let total_for = |channel: Channel| {
            channels
                .iter()
                .find(|c| c.channel == channel)
                .map_or(0.0, |c| c.total)
        };
        let total_tv_spend = total_for(Channel::Tv);
        let total_radio_spend = total_for(Channel::Radio);
        let total_social_spend = total_for(Channel::Social);
        let total_spend = total_tv_spend + total_radio_spend + total_social_spend;
        let total_revenue = sum(&revenue);
        let roi = roi(total_revenue, total_spend);
        let row_count = dataset.len();

        debug!(
            rows = row_count,
            total_spend,
            total_revenue,
            roi,
            "analysis computed"
        );

        AnalysisResult {
            row_count,
            months: dataset.text_column(MONTH_COLUMN),
            total_tv_spend,
            total_radio_spend,
            total_social_spend,
            total_spend,
            total_revenue,
            roi,
            // Zámerne ROI delené počtom riadkov, nie priemer ROI po riadkoch
            average_roi: roi / row_count as f64,
            average_revenue: mean(&revenue),
            revenue_std_dev: standard_deviation(&revenue),
            channels,
            weights,
        }
    }
}
