//! End-to-end tests: CSV files on disk to a written HTML page.

use std::fs;
use std::path::Path;

use baseline_api::DatasetKind;
use report::{DatasetConfig, ReportBuilder, ReportConfig, SectionOutcome};

fn write_temperature(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("temperature_data.csv");
    let mut content = String::from("Land-Ocean: Global Means\nYear,Jan,J-D,D-N\n");
    let values = [0.12, 0.08, 0.15, 0.10, 0.18, 0.22, 0.19, 0.25, 0.30, 0.27, 0.85];
    for (i, v) in values.iter().enumerate() {
        content.push_str(&format!("{},0.0,{},0.0\n", 2010 + i, v));
    }
    content.push_str("2021,0.1,***,***\n");
    fs::write(&path, content).unwrap();
    path
}

fn write_house_prices(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("house_price_data.csv");
    let mut content = String::from("month,price\n");
    for (year, base) in [(2019, 300_000.0), (2020, 310_000.0), (2021, 305_000.0)] {
        for month in 1..=12 {
            content.push_str(&format!("{}-{:02}-01,\"${:.0}\"\n", year, month, base));
        }
    }
    content.push_str("2022-01-01,\"$999,999\"\n");
    fs::write(&path, content).unwrap();
    path
}

fn config_for(dir: &Path) -> ReportConfig {
    let temperature = DatasetConfig {
        path: write_temperature(dir),
        ..DatasetConfig::preset(DatasetKind::Temperature)
    };
    let prices = DatasetConfig {
        path: write_house_prices(dir),
        ..DatasetConfig::preset(DatasetKind::HousePrice)
    };
    let crime = DatasetConfig {
        path: dir.join("crime.csv"),
        ..DatasetConfig::preset(DatasetKind::Crime)
    };

    ReportConfig {
        output: dir.join("site").join("index.html"),
        datasets: vec![temperature, prices, crime],
        ..ReportConfig::default()
    }
}

#[test]
fn test_page_with_one_missing_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    let report = ReportBuilder::new().build(&config);
    assert_eq!(report.sections.len(), 3);
    assert_eq!(report.failed_count(), 1);

    match &report.sections[0].outcome {
        SectionOutcome::Rendered { verdict, .. } => {
            assert!(verdict.significance.is_significant());
        }
        other => panic!("temperature should render, got {:?}", other),
    }
    assert!(matches!(
        report.sections[2].outcome,
        SectionOutcome::Failed { .. }
    ));

    report.write_to(&config.output).unwrap();
    let html = fs::read_to_string(&config.output).unwrap();
    assert!(html.contains("Average Global Temperature"));
    assert!(html.contains("Adjusted for Inflation"));
    assert!(html.contains("The latest change is an increase and it is significant compared to last year."));
    assert!(html.contains("The latest change is a decrease and it is not significant compared to last year."));
    assert!(html.contains("could not be generated"));
    assert!(html.contains("chart-0-temperature"));
    assert!(html.contains("chart-1-house_price"));
}

#[test]
fn test_config_file_to_page() {
    let dir = tempfile::tempdir().unwrap();
    write_temperature(dir.path());
    let config_path = dir.path().join("datadebunk.toml");
    fs::write(
        &config_path,
        r#"
title = "Check the Baseline"
intro = ["One paragraph."]
output = "out/index.html"

[[datasets]]
kind = "temperature"
path = "temperature_data.csv"
heading = "Global Temperature"
"#,
    )
    .unwrap();

    let config = ReportConfig::load(&config_path).unwrap();
    let report = ReportBuilder::new().build(&config);
    assert_eq!(report.failed_count(), 0);
    report.write_to(&config.output).unwrap();

    let html = fs::read_to_string(dir.path().join("out").join("index.html")).unwrap();
    assert!(html.contains("<h1>Check the Baseline</h1>"));
    assert!(html.contains("<h2>Global Temperature</h2>"));
    assert!(html.contains("<p>One paragraph.</p>"));
}

#[test]
fn test_house_price_chart_is_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = DatasetConfig {
        path: write_house_prices(dir.path()),
        ..DatasetConfig::preset(DatasetKind::HousePrice)
    };

    let output = report::analyze_dataset(&dataset).unwrap();
    assert_eq!(output.chart.x_axis.title, "Year");
    let (low, high) = output.chart.y_axis.range.unwrap();
    assert_eq!(low, 0.0);
    assert!(high > 310_000.0);
    assert!(output.chart.drag_locked);
    assert_eq!(output.chart.source.unwrap().label, "dqydj.com");
}
