use std::path::Path;

use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use validator::Validate;

use crate::analyzers::{DatasetAnalyzer, DatasetSummary, MonthlySeries, TemperatureHistogram};
use crate::cli::args::{Cli, Commands, OutputFormat};
use crate::models::MonthlyAggregate;
use crate::processors::{Aggregator, Pipeline, PipelineOutput};
use crate::utils::progress::ProgressReporter;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Report { file, format } => report(&file, format),
        Commands::Histogram { file, year, format } => histogram(&file, year, format),
        Commands::Info { file } => info(&file),
        Commands::Validate { file } => validate(&file),
    }
}

fn run_pipeline(file: &Path) -> anyhow::Result<PipelineOutput> {
    let progress = ProgressReporter::spinner("Loading station export...", false);
    match Pipeline::new().run(file) {
        Ok(output) => {
            progress.finish_with_message(&format!("Loaded {} daily records", output.raw.len()));
            Ok(output)
        }
        Err(err) => {
            progress.finish_and_clear();
            Err(err.into())
        }
    }
}

#[derive(Serialize)]
struct ReportPayload<'a> {
    summary: &'a DatasetSummary,
    monthly: &'a [MonthlyAggregate],
    series: MonthlySeries,
}

fn report(file: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let output = run_pipeline(file)?;
    let summary = DatasetAnalyzer::new().analyze(&output.raw, &output.enriched);

    match format {
        OutputFormat::Json => {
            let payload = ReportPayload {
                summary: &summary,
                monthly: &output.monthly,
                series: MonthlySeries::from_aggregates(&output.monthly),
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Table => {
            println!("{}\n", summary.summary());

            if output.monthly.is_empty() {
                println!("No months with qualifying records");
                return Ok(());
            }

            println!("{}", monthly_table(&output.monthly));
        }
    }

    Ok(())
}

fn monthly_table(aggregates: &[MonthlyAggregate]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Month",
        "Mean Temp (°F)",
        "Avg TMAX (°F)",
        "Avg TMIN (°F)",
        "Total PRCP (in)",
        "Total SNOW (in)",
    ]);

    for aggregate in aggregates {
        table.add_row(vec![
            aggregate.month_label().to_string(),
            format!("{:.1}", aggregate.mean_temp_avg),
            format!("{:.1}", aggregate.tmax_avg),
            format!("{:.1}", aggregate.tmin_avg),
            format!("{:.2}", aggregate.prcp_total),
            format!("{:.1}", aggregate.snow_total),
        ]);
    }

    table
}

#[derive(Serialize)]
struct HistogramPayload {
    year: i32,
    days: usize,
    tmax: TemperatureHistogram,
    tmin: TemperatureHistogram,
}

fn histogram(file: &Path, year: i32, format: OutputFormat) -> anyhow::Result<()> {
    let output = run_pipeline(file)?;
    let yearly = Aggregator::new().filter_year(&output.enriched, year);

    let tmax = TemperatureHistogram::of_daily_max(&yearly);
    let tmin = TemperatureHistogram::of_daily_min(&yearly);

    match format {
        OutputFormat::Json => {
            let payload = HistogramPayload {
                year,
                days: yearly.len(),
                tmax,
                tmin,
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Table => {
            if yearly.is_empty() {
                println!("No qualifying records for {year}");
                return Ok(());
            }

            println!("Daily max temperatures, {year} ({} days)", yearly.len());
            println!("{}", histogram_table(&tmax));
            println!("\nDaily min temperatures, {year} ({} days)", yearly.len());
            println!("{}", histogram_table(&tmin));
        }
    }

    Ok(())
}

fn histogram_table(histogram: &TemperatureHistogram) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Range (°F)", "Days"]);

    for bin in &histogram.bins {
        if bin.count == 0 {
            continue;
        }
        table.add_row(vec![
            format!("{:.0} to {:.0}", bin.lower, bin.upper),
            bin.count.to_string(),
        ]);
    }

    table
}

fn info(file: &Path) -> anyhow::Result<()> {
    let output = run_pipeline(file)?;
    let summary = DatasetAnalyzer::new().analyze(&output.raw, &output.enriched);

    println!("{}", summary.summary());
    println!(
        "Months represented: {}",
        output
            .monthly
            .iter()
            .map(|a| a.month_label())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}

fn validate(file: &Path) -> anyhow::Result<()> {
    let output = run_pipeline(file)?;

    let dropped = output.raw.len() - output.enriched.len();
    println!(
        "Loaded {} records, {} survive cleaning ({} dropped for missing TMAX/TMIN/PRCP)",
        output.raw.len(),
        output.enriched.len(),
        dropped
    );

    // Physical range checks flag rows without dropping them
    let violations: Vec<String> = output
        .raw
        .iter()
        .filter_map(|record| {
            record
                .validate()
                .err()
                .map(|e| format!("{} {}: {}", record.station, record.date, e))
        })
        .collect();

    if violations.is_empty() {
        println!("All measurements within physical ranges");
    } else {
        println!("{} records outside physical ranges:", violations.len());
        for violation in violations.iter().take(10) {
            println!("  {violation}");
        }
        if violations.len() > 10 {
            println!("  ... and {} more", violations.len() - 10);
        }
    }

    Ok(())
}
