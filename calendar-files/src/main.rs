use std::{fmt, path::PathBuf, str::FromStr};

use anyhow::{Context, Result};
use common_utils::{
    file_utils::{record_file_paths, FileFormat},
    parsing_utils::RecordConfig,
    schedule::{DayRangeList, MonthList, Schedule, TimeOfDayList},
};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use structopt::{clap, StructOpt};
use tracing_subscriber::EnvFilter;

/// Creates or reads records kept in a <month>/<week day>/<time of day>/Dane.<format> directory tree.
///
/// Example: -m "styczeń, luty" -d "pn-wt, czw" -t "r, w" -o create -f csv
#[derive(StructOpt)]
struct Cli {
    /// Comma-separated list of months (e.g. "styczeń, luty")
    #[structopt(short, long)]
    months: MonthList,

    /// Comma-separated list of day ranges, one per month (e.g. "pn-wt, pt").
    /// A range whose first day comes after its last day wraps around the week.
    #[structopt(short, long)]
    days: DayRangeList,

    /// Comma-separated list of times of day (r for rano, w for wieczór).
    /// Days beyond the end of this list get rano.
    #[structopt(short = "t", long = "timeofday", default_value = "r")]
    times_of_day: TimeOfDayList,

    /// Operation mode
    #[structopt(short, long, possible_values = &["create", "read"])]
    operation: Operation,

    /// File format of the records
    #[structopt(short, long, possible_values = &["csv", "json"])]
    format: FileFormat,

    /// The directory under which the month directories live. Defaults to the current directory.
    #[structopt(long, parse(from_os_str))]
    root: Option<PathBuf>,

    /// Set seed to get reproducible records on consecutive create runs
    #[structopt(short, long)]
    seed: Option<u64>,

    /// The model whose durations are summed by the read operation
    #[structopt(long, default_value = "A")]
    model: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Create,
    Read,
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Operation::Create),
            "read" => Ok(Operation::Read),
            _ => Err(format!("Invalid operation: {}. Allowed values are: create, read", s)),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "create"),
            Operation::Read => write!(f, "read"),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Cli::from_args();
    let schedule = match Schedule::new(args.months.0, args.days.0) {
        Ok(schedule) => schedule,
        Err(err) => {
            clap::Error::with_description(&err.to_string(), clap::ErrorKind::ValueValidation)
                .exit()
        }
    };
    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir()
            .with_context(|| "Could not determine the current directory")?,
    };
    let paths = record_file_paths(&root, &schedule, &args.times_of_day.0, args.format);
    tracing::info!(operation = %args.operation, files = paths.len(), root = ?root, "paths resolved");

    match args.operation {
        Operation::Create => {
            let mut rng = match args.seed {
                Some(seed) => Pcg64::seed_from_u64(seed),
                None => Pcg64::from_entropy(),
            };
            let written = record_synthesiser::run(&paths, args.format, &mut rng)
                .with_context(|| "The creation of the records failed")?;
            println!(
                "{} record files have been written under {:?}",
                written.len(),
                root.as_os_str()
            );
        }
        Operation::Read => {
            let summary = record_stats::run(&paths, args.format, &args.model)
                .with_context(|| "Reading the records failed")?;
            for missing in &summary.missing {
                println!("File {:?} does not exist, skipping", missing.as_os_str());
            }
            println!(
                "Total duration for model {} over {} records: {}{}",
                args.model,
                summary.read,
                summary.total,
                RecordConfig::DURATION_UNIT
            );
        }
    }
    Ok(())
}
