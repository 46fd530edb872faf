use approx::assert_relative_eq;
use sales_insight::{
    Aggregator, AnalysisConfig, AnalysisSession, Channel, CsvDataLoader, DataLoader, Dataset,
    Error, PredictionError, RevenueModel, SpendInput,
};

/// Ukážkový dataset z README (Jan–May 2023)
const README_CSV: &str = "\
Month,TV_Spend,Radio_Spend,SocialMedia_Spend,Sales_Revenue
Jan-2023,5000,3000,2500,15000
Feb-2023,5500,3200,2600,16000
Mar-2023,5800,3300,2700,17000
Apr-2023,6000,3300,2800,17500
May-2023,6200,3400,3000,18500
";

fn readme_dataset() -> Dataset {
    let loaded = CsvDataLoader::new().load_from_string(README_CSV).unwrap();
    Dataset::from_loaded(loaded, 3).unwrap()
}

#[test]
fn readme_dataset_totals() {
    let result = Aggregator::analyze(&readme_dataset());

    assert_eq!(result.row_count, 5);
    assert_eq!(result.total_tv_spend, 28500.0);
    assert_eq!(result.total_radio_spend, 16200.0);
    assert_eq!(result.total_social_spend, 13600.0);
    assert_eq!(result.total_spend, 58300.0);
    assert_eq!(result.total_revenue, 84000.0);
    assert_relative_eq!(result.roi, (84000.0 - 58300.0) / 58300.0 * 100.0, epsilon = 1e-9);
    assert_relative_eq!(result.roi, 44.08, epsilon = 0.005);
    assert_relative_eq!(result.average_roi, result.roi / 5.0, epsilon = 1e-12);
    assert_relative_eq!(result.average_revenue, 16800.0, epsilon = 1e-9);
    assert_eq!(
        result.months,
        vec!["Jan-2023", "Feb-2023", "Mar-2023", "Apr-2023", "May-2023"]
    );
}

#[test]
fn readme_dataset_correlations() {
    let result = Aggregator::analyze(&readme_dataset());

    for channel in &result.channels {
        assert!(channel.correlation > 0.9, "{} r = {}", channel.channel, channel.correlation);
        assert_eq!(channel.strength.label(), "Very Strong");
    }

    let sum: f64 = result.weights.iter().map(|w| w.normalized_weight).sum();
    assert_relative_eq!(sum, 1.0, epsilon = 1e-12);

    let tv = result.channel(Channel::Tv).unwrap();
    let tv_weight = result.weight(Channel::Tv).unwrap();
    assert_eq!(tv.regression.slope, tv_weight.slope);
    assert_eq!(tv.correlation, tv_weight.correlation);
}

#[test]
fn aggregation_is_deterministic() {
    let dataset = readme_dataset();
    let first = Aggregator::analyze(&dataset);
    let second = Aggregator::analyze(&dataset);
    assert_eq!(first, second);
    for (a, b) in first.weights.iter().zip(second.weights.iter()) {
        assert_eq!(a.normalized_weight.to_bits(), b.normalized_weight.to_bits());
    }
}

#[test]
fn prediction_matches_formula() {
    let result = Aggregator::analyze(&readme_dataset());
    let spend = SpendInput::new(7000.0, 3500.0, 3100.0);

    let expected = result.average_revenue
        + result
            .weights
            .iter()
            .map(|w| w.slope * spend.get(w.channel) * w.normalized_weight)
            .sum::<f64>();
    assert_eq!(result.predictor().baseline(), result.average_revenue);
    let predicted = result.predictor().predict(&spend).unwrap();
    assert_relative_eq!(predicted, expected.max(0.0), epsilon = 1e-9);
    assert_eq!(
        result.predictor().predict(&SpendInput::default()),
        Err(PredictionError::NoSpend)
    );
}

#[test]
fn session_surfaces_validation_errors_verbatim() {
    let mut session = AnalysisSession::default();

    let err = session
        .load_csv("Month,TV_Spend,Radio_Spend,SocialMedia_Spend\nJan,1,2,3\nFeb,1,2,3\nMar,1,2,3\n")
        .unwrap_err();
    assert_eq!(
        err,
        Error::MissingColumns {
            columns: vec!["Sales_Revenue".to_string()]
        }
    );
    assert_eq!(err.to_string(), "missing required columns: Sales_Revenue");

    let err = session
        .load_csv("Month,TV_Spend,Radio_Spend,SocialMedia_Spend,Sales_Revenue\nJan,1,2,3,4\nFeb,1,2,3,4\n")
        .unwrap_err();
    assert_eq!(err, Error::InsufficientRows { found: 2, required: 3 });

    let err = session
        .load_csv(&README_CSV.replace("5500", "abc"))
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidNumericValue {
            row: 2,
            column: "TV_Spend".to_string(),
            value: "abc".to_string(),
        }
    );
    assert!(session.current().is_none());
}

#[test]
fn session_report_and_history() {
    let mut session = AnalysisSession::default();
    session.load_csv(README_CSV).unwrap();

    let report = session.report().unwrap();
    assert!(report.contains("Total Revenue: $84,000.00"));
    assert!(report.contains("Total Spend: $58,300.00"));
    assert!(report.contains("ROI: 44.08%"));
    assert!(report.contains("May-2023,6200.00,3400.00,3000.00,18500.00"));

    let saved = session.save_to_history().unwrap().clone();
    assert_eq!(saved.data_point_count, 5);
    assert_eq!(saved.total_spend, 58300.0);

    let json = session.history().to_json().unwrap();
    assert!(json.contains("\"dataPointCount\":5"));
}

#[test]
fn configured_session_keeps_three_row_minimum() {
    assert!(matches!(
        AnalysisConfig::builder().min_rows(1).build(),
        Err(Error::InvalidConfig { .. })
    ));

    let config = AnalysisConfig::builder().min_rows(4).build().unwrap();
    let mut session = AnalysisSession::new(config);
    let one_row = "Month,TV_Spend,Radio_Spend,SocialMedia_Spend,Sales_Revenue\nJan,1,2,3,4\n";
    assert_eq!(
        session.load_csv(one_row).unwrap_err(),
        Error::InsufficientRows { found: 1, required: 4 }
    );
    assert!(session.current().is_none());
}

#[test]
fn report_keeps_numeric_month_labels() {
    let mut session = AnalysisSession::default();
    let csv = README_CSV
        .replace("Jan-2023", "1")
        .replace("Feb-2023", "2")
        .replace("Mar-2023", "3")
        .replace("Apr-2023", "4")
        .replace("May-2023", "5");
    session.load_csv(&csv).unwrap();

    let report = session.report().unwrap();
    assert!(report.contains("\n1,5000.00,3000.00,2500.00,15000.00\n"));
    assert!(!report.contains("1.00,5000.00"));
}
