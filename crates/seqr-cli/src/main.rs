//! seqr CLI: descriptive statistics and grouping over CSV columns.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use seqr_io::Dataset;
use seqr_operators::SequenceExt;

#[derive(Parser)]
#[command(name = "seqr")]
#[command(about = "Lazy query/aggregation engine over CSV columns", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Descriptive statistics for one numeric column
    Describe {
        /// Path to the CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Column to describe
        #[arg(short, long)]
        column: String,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Group rows by a column: sizes and optional per-bucket sums
    Group {
        /// Path to the CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Column to group by
        #[arg(short, long)]
        by: String,

        /// Numeric column to sum per bucket
        #[arg(long)]
        sum: Option<String>,
    },

    /// Distinct values of a column, in first-occurrence order
    Distinct {
        /// Path to the CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Column to deduplicate
        #[arg(short, long)]
        column: String,
    },
}

/// Report emitted by `describe`. `mean` is the midrange `(min + max) / 2`;
/// the arithmetic mean is `average`.
#[derive(Serialize)]
struct DescribeReport {
    column: String,
    count: usize,
    sum: f64,
    min: f64,
    max: f64,
    amplitude: f64,
    average: f64,
    mean: f64,
    median: f64,
    mode: f64,
    variance_population: f64,
    variance_sample: Option<f64>,
    stddev_population: f64,
    stddev_sample: Option<f64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Describe {
            input,
            column,
            json,
        } => {
            let dataset = Dataset::load(&input)?;
            let report = describe_column(&dataset, &column)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Commands::Group { input, by, sum } => {
            let dataset = Dataset::load(&input)?;
            let by_key = by.clone();
            let groups = dataset
                .rows()
                .group_by(move |row| row.field(&by_key).unwrap_or("").to_string());
            tracing::debug!(groups = groups.realize().len(), by = %by, "grouped rows");
            match sum {
                Some(sum_column) => {
                    // Non-numeric cells coerce to 0 for grouped sums.
                    let totals = groups.sums(|row| {
                        row.field(&sum_column)
                            .and_then(|s| s.trim().parse::<f64>().ok())
                            .unwrap_or(0.0)
                    });
                    for (key, total) in totals {
                        println!("{key}: {total}");
                    }
                }
                None => {
                    for (key, size) in groups.sizes() {
                        println!("{key}: {size}");
                    }
                }
            }
        }
        Commands::Distinct { input, column } => {
            let dataset = Dataset::load(&input)?;
            for value in dataset.column(&column)?.distinct().iterate() {
                println!("{value}");
            }
        }
    }
    Ok(())
}

fn describe_column(
    dataset: &Dataset,
    column: &str,
) -> Result<DescribeReport, Box<dyn std::error::Error>> {
    let values = dataset.column_f64(column)?;
    let id = |v: &f64| *v;

    let (min, max) = seqr_stats::extrema(&values, id)?;
    let report = DescribeReport {
        column: column.to_string(),
        count: seqr_stats::count(&values),
        sum: seqr_stats::sum(&values, id),
        min,
        max,
        amplitude: max - min,
        average: seqr_stats::average(&values, id)?,
        mean: seqr_stats::mean(&values, id)?,
        median: seqr_stats::median(&values, id)?,
        mode: seqr_stats::mode(&values, id)?,
        variance_population: seqr_stats::variance_population(&values, id)?,
        // Sample moments are undefined for a single row; report them as absent.
        variance_sample: seqr_stats::variance_sample(&values, id).ok(),
        stddev_population: seqr_stats::stddev_population(&values, id)?,
        stddev_sample: seqr_stats::stddev_sample(&values, id).ok(),
    };
    tracing::debug!(column = %column, count = report.count, "described column");
    Ok(report)
}

fn print_report(report: &DescribeReport) {
    println!("column:              {}", report.column);
    println!("count:               {}", report.count);
    println!("sum:                 {}", report.sum);
    println!("min:                 {}", report.min);
    println!("max:                 {}", report.max);
    println!("amplitude:           {}", report.amplitude);
    println!("average:             {}", report.average);
    println!("mean (midrange):     {}", report.mean);
    println!("median:              {}", report.median);
    println!("mode:                {}", report.mode);
    println!("variance (pop):      {}", report.variance_population);
    println!("stddev (pop):        {}", report.stddev_population);
    match (report.variance_sample, report.stddev_sample) {
        (Some(var), Some(dev)) => {
            println!("variance (sample):   {var}");
            println!("stddev (sample):     {dev}");
        }
        _ => println!("sample moments:      undefined (need at least 2 rows)"),
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn describe_args_parse() {
        let cli = Cli::try_parse_from([
            "seqr", "describe", "--input", "data.csv", "--column", "age", "--json",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn group_requires_by() {
        let cli = Cli::try_parse_from(["seqr", "group", "--input", "data.csv"]);
        assert!(cli.is_err());
    }
}
