use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use sort_strategy::input::{parse_values, random_values};
use sort_strategy::{CountingRunner, SortConfig, SortError, StrategyKind};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEMO_VALUES: [i32; 5] = [5, 1, 4, 2, 8];

// =============================================================================
// Command line
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    All,
    One(StrategyKind),
}

fn parse_selection(s: &str) -> Result<Selection, SortError> {
    if s.trim().eq_ignore_ascii_case("all") {
        Ok(Selection::All)
    } else {
        s.parse().map(Selection::One)
    }
}

#[derive(Parser, Debug)]
#[command(name = "sort_demo")]
#[command(about = "Sort integers with an interchangeable strategy", long_about = None)]
struct Cli {
    /// Strategy to use: bubble, quick or all
    #[arg(short, long, value_parser = parse_selection)]
    strategy: Option<Selection>,

    /// TOML file with strategy, values and repeat
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Values to sort, e.g. "5,1,4,2,8"
    #[arg(long, conflicts_with = "random")]
    values: Option<String>,

    /// Sort this many random values instead
    #[arg(short, long)]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Number of times each strategy sorts the sequence
    #[arg(long)]
    repeat: Option<usize>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

// =============================================================================
// Running the strategies
// =============================================================================

#[derive(Debug, Serialize)]
struct SortReport {
    strategy: StrategyKind,
    input: Vec<i32>,
    output: Vec<i32>,
    sorts: u64,
}

fn run_strategy(kind: StrategyKind, input: &[i32], repeat: usize) -> Result<SortReport, SortError> {
    let mut runner = CountingRunner::with_strategy(kind.build());
    let mut data = input.to_vec();
    for _ in 0..repeat {
        runner.try_sort(&mut data)?;
    }
    info!(strategy = %kind, len = data.len(), sorts = runner.count(), "finished");

    Ok(SortReport {
        strategy: kind,
        input: input.to_vec(),
        output: data,
        sorts: runner.count(),
    })
}

fn format_values(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_report(report: &SortReport) {
    println!("{}", format!("Sorting using {}", report.strategy).bold());
    println!("  before: {}", format_values(&report.input).yellow());
    println!("  after:  {}", format_values(&report.output).green());
    println!("  sorts performed: {}", report.sorts);
}

fn load_config(cli: &Cli) -> Result<SortConfig, SortError> {
    let mut config = match &cli.config {
        Some(path) => SortConfig::from_file(path)?,
        None => SortConfig {
            values: DEMO_VALUES.to_vec(),
            ..SortConfig::default()
        },
    };

    if let Some(values) = &cli.values {
        config.values = parse_values(values)?;
    } else if let Some(count) = cli.random {
        config.values = random_values(count, cli.seed);
    }
    if let Some(repeat) = cli.repeat {
        config.repeat = repeat;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli)?;
    let kinds: Vec<StrategyKind> = match cli.strategy {
        Some(Selection::All) => StrategyKind::ALL.to_vec(),
        Some(Selection::One(kind)) => vec![kind],
        None => vec![config.strategy],
    };

    let reports = kinds
        .into_iter()
        .map(|kind| run_strategy(kind, &config.values, config.repeat))
        .collect::<Result<Vec<_>, _>>()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        print_report(report);
    }
    if reports.len() > 1 {
        let agree = reports.windows(2).all(|w| w[0].output == w[1].output);
        if agree {
            println!("{}", "All strategies agree".green());
        } else {
            println!("{}", "Strategies disagree".bold().red());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".bold().red());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("ALL"), Ok(Selection::All));
        assert_eq!(
            parse_selection("bubble"),
            Ok(Selection::One(StrategyKind::Bubble))
        );
        assert!(parse_selection("merge").is_err());
    }

    #[test]
    fn test_run_strategy_counts_repeats() {
        let report = run_strategy(StrategyKind::Bubble, &DEMO_VALUES, 3).unwrap();
        assert_eq!(report.output, vec![1, 2, 4, 5, 8]);
        assert_eq!(report.input, DEMO_VALUES.to_vec());
        assert_eq!(report.sorts, 3);
    }

    #[test]
    fn test_cli_values_override_demo_values() {
        let cli = Cli::parse_from(["sort_demo", "--values", "3 2 1", "--repeat", "2"]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.values, vec![3, 2, 1]);
        assert_eq!(config.repeat, 2);
        assert_eq!(config.strategy, StrategyKind::Quick);
    }

    #[test]
    fn test_cli_rejects_zero_repeat() {
        let cli = Cli::parse_from(["sort_demo", "--repeat", "0"]);
        assert!(load_config(&cli).is_err());
    }

    #[test]
    fn test_report_json_shape() {
        let report = run_strategy(StrategyKind::Quick, &[2, 1], 1).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["strategy"], "quick");
        assert_eq!(json["output"], serde_json::json!([1, 2]));
        assert_eq!(json["sorts"], 1);
    }
}
