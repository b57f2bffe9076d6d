/// Iris dimensionality-reduction comparison.
///
/// Loads the Iris dataset (150 samples, 4 features, 3 species), standardizes
/// each feature column, runs the standard eight-method suite, and renders the
/// embeddings side by side.
///
/// Usage:
///     cargo run --release --bin iris
///
/// Output:
///     figures/iris_comparison.png    — 3×3 grid of 2D scatterplots
///     figures/iris_comparison.json   — per-method timing report
use std::fs;

use prettytable::{row, Table};
use reduce_compare::{prelude::*, print_if};

// ─── Timing report ───────────────────────────────────────────────────────────

#[derive(serde::Serialize)]
struct MethodReport {
    method: String,
    rows: usize,
    seconds: f64,
}

// ─── Main ────────────────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dataset = linfa_datasets::iris();
    let mut records = dataset.records().to_owned();
    let labels: Vec<usize> = dataset.targets().iter().copied().collect();

    let n_classes = distinct_classes(&labels);

    print_if!(
        VERBOSE,
        "Loaded iris: {} samples × {} features, {} classes",
        records.nrows(),
        records.ncols(),
        n_classes
    );

    standardize(&mut records);

    let methods = standard_suite();

    fs::create_dir_all("figures")?;
    let config = ChartConfig::builder()
        .caption("Iris — dimensionality reduction comparison")
        .path("figures/iris_comparison.png")
        .width(1500)
        .height(1500)
        .build();

    let projections = run_comparison(&records, &labels, &methods, Some(config))?;

    // Per-method timing summary
    let mut table = Table::new();
    table.add_row(row!["Method", "Rows", "Seconds"]);
    for projection in &projections {
        table.add_row(row![
            projection.name,
            projection.coords.nrows(),
            format!("{:.3}", projection.elapsed.as_secs_f64())
        ]);
    }
    table.printstd();

    let report: Vec<MethodReport> = projections
        .iter()
        .map(|p| MethodReport {
            method: p.name.clone(),
            rows: p.coords.nrows(),
            seconds: p.elapsed.as_secs_f64(),
        })
        .collect();
    fs::write(
        "figures/iris_comparison.json",
        serde_json::to_string_pretty(&report)?,
    )?;

    print_if!(
        VERBOSE,
        "Wrote figures/iris_comparison.png and figures/iris_comparison.json"
    );

    Ok(())
}
