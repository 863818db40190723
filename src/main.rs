//! iris-eda: Exploratory Data Analysis CLI
//!
//! Loads the Iris dataset, prints its structure and statistics, groups it by
//! class code, shows four charts and closes with a list of observations.

use anyhow::Result;
use clap::Parser;
use polars::prelude::DataFrame;

use iris_eda::charts::{iris_charts, show_charts, Chart};
use iris_eda::cli::Cli;
use iris_eda::pipeline::{
    add_species_column, describe, drop_missing_rows, group_extents, group_means, head,
    load_iris, memory_kb, missing_counts, schema, DatasetSource, PETAL_LENGTH,
};
use iris_eda::report::{
    describe_table, frame_table, group_means_table, group_observation, key_findings,
    missing_table, print_indented, schema_table, AnalysisReport, Evidence,
};
use iris_eda::utils::{
    create_spinner, print_banner, print_chart_summary, print_completion, print_error,
    print_finding, print_info, print_section, print_source, print_step_header, print_success,
    print_warning,
};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let source = cli.source();

    if cli.json {
        return run_json(&source, cli.no_display);
    }

    print_banner(env!("CARGO_PKG_VERSION"));
    print_source(&source.to_string());

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");
    let df = load_with_feedback(&source)?;

    // Step 2: Inspect structure and missing values
    print_step_header(2, "Inspect Dataset");

    print_section(&format!("First {} rows", cli.head_rows));
    print_indented(&frame_table(&head(&df, cli.head_rows))?);

    print_section("Dataset info");
    print_indented(&schema_table(&schema(&df)));
    print_info(&format!(
        "{} rows x {} columns, {:.1} KB in memory",
        df.height(),
        df.width(),
        memory_kb(&df)
    ));

    print_section("Missing values per column");
    print_indented(&missing_table(&missing_counts(&df)));

    let before = df.height();
    let mut df = drop_missing_rows(&df)?;
    if df.height() == before {
        print_info("No rows with missing values");
    } else {
        print_warning(&format!(
            "Removed {} row(s) with missing values",
            before - df.height()
        ));
    }

    // Step 3: Aggregate
    print_step_header(3, "Basic Data Analysis");

    print_section("Descriptive statistics");
    let summary = describe(&df)?;
    print_indented(&describe_table(&summary));

    print_section("Mean values per species (0=setosa, 1=versicolor, 2=virginica)");
    let groups = group_means(&df)?;
    print_indented(&group_means_table(&groups));

    add_species_column(&mut df)?;
    print_success("Added species column");

    let extents = group_extents(&df, PETAL_LENGTH)?;
    let evidence = Evidence {
        groups: &groups,
        summaries: &summary,
        petal_length_extents: &extents,
    };

    print_section("Observation");
    print_finding(&group_observation(&evidence));

    // Step 4: Visualize
    print_step_header(4, "Data Visualization");
    let charts = iris_charts(&df)?;
    display_charts(charts, cli.no_display)?;

    // Step 5: Findings
    print_step_header(5, "Findings & Observations");
    print_section("Key Findings");
    for finding in key_findings(&evidence) {
        print_finding(&finding);
    }

    print_completion();
    Ok(())
}

/// Load the dataset behind a spinner, reporting the error category on failure
fn load_with_feedback(source: &DatasetSource) -> Result<DataFrame> {
    let spinner = create_spinner("Loading Iris dataset...");
    match load_iris(source) {
        Ok(df) => {
            spinner.finish_and_clear();
            print_success("Dataset loaded successfully.");
            Ok(df)
        }
        Err(e) => {
            spinner.finish_and_clear();
            print_error(e.category(), &e.to_string());
            Err(e.into())
        }
    }
}

fn display_charts(charts: Vec<Chart>, no_display: bool) -> Result<()> {
    if no_display {
        for chart in &charts {
            print_chart_summary(&chart.summary());
        }
        return Ok(());
    }

    print_info("Showing charts - use Next to advance, close the window to continue");
    show_charts(charts)?;
    print_success("Charts closed");
    Ok(())
}

/// Run every step silently and print the report as JSON
fn run_json(source: &DatasetSource, no_display: bool) -> Result<()> {
    let df = match load_iris(source) {
        Ok(df) => df,
        Err(e) => {
            print_error(e.category(), &e.to_string());
            return Err(e.into());
        }
    };

    let (report, _df) = AnalysisReport::build(df, &source.to_string())?;
    println!("{}", report.to_json()?);

    if !no_display {
        show_charts(report.charts)?;
    }
    Ok(())
}
