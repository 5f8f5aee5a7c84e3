mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use entropy_waspas::input::{load_table, load_table_with};
use entropy_waspas::report::{
    DEFAULT_PRECISION, ReportFormat, ReportOptions, render_reports, write_reports,
};
use entropy_waspas::{DEFAULT_LAMBDA, WaspasParams, rank_with};

#[derive(Debug, Parser)]
#[command(name = "entropy-waspas", version, about = "Rank candidates with entropy-weighted WASPAS")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the candidates of a CSV/TSV table (optionally gzip-compressed).
    Rank(RankArgs),
}

#[derive(Debug, Clone, Args)]
struct RankArgs {
    /// Input table; first column names the candidate, the rest are criteria.
    #[arg(long)]
    input: PathBuf,

    /// Directory for ranking.txt / ranking.json; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Weighted-sum share of the WASPAS blend, within [0, 1].
    #[arg(long, default_value_t = DEFAULT_LAMBDA)]
    lambda: f64,

    /// Decimal places in the text report.
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Include the normalized matrix and weights in the report.
    #[arg(long)]
    trace: bool,

    /// Field delimiter; inferred from the file extension when omitted.
    #[arg(long)]
    delimiter: Option<char>,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Rank(args) => run_rank(&args),
    }
}

fn run_rank(args: &RankArgs) -> Result<(), String> {
    let params = WaspasParams::new(args.lambda).map_err(|e| e.to_string())?;

    let table = match args.delimiter {
        Some(delimiter) => load_table_with(&args.input, delimiter),
        None => load_table(&args.input),
    }
    .map_err(|e| format!("{}: {e}", args.input.display()))?;

    let outcome = rank_with(&table, &params).map_err(|e| e.to_string())?;

    let opts = ReportOptions {
        precision: args.precision,
        include_trace: args.trace,
    };
    match &args.out {
        Some(dir) => {
            write_reports(&outcome, dir, args.format, &opts).map_err(|e| e.to_string())?;
        }
        None => {
            let rendered = render_reports(&outcome, args.format, &opts).map_err(|e| e.to_string())?;
            print!("{rendered}");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
