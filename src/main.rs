use anyhow::Context;
use clap::Parser;
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};
use time::OffsetDateTime;

use plant_tracker::{Clock, FixedClock, PlantStore, Session, SessionOptions, parse_date};

#[derive(Parser)]
#[command(name = "plant-tracker")]
#[command(about = "Track which plants are due for watering")]
struct Cli {
    /// Command script to run (reads stdin when omitted)
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print each listing as a JSON object
    #[arg(long)]
    json: bool,

    /// Stop at the first line that fails
    #[arg(long)]
    strict: bool,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    today: Option<OffsetDateTime>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => {
            log::debug!("Reading commands from {:?}", path);
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {:?}", path))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let options = SessionOptions {
        json: args.json,
        strict: args.strict,
    };

    match args.today {
        Some(today) => run(PlantStore::with_clock(FixedClock::new(today)), options, input),
        None => run(PlantStore::new(), options, input),
    }
}

fn run<C: Clock>(
    store: PlantStore<C>,
    options: SessionOptions,
    input: Box<dyn BufRead>,
) -> anyhow::Result<()> {
    let stdout = io::stdout().lock();
    let mut session = Session::new(store, options, stdout);
    let summary = session.run(input)?;
    if summary.failed > 0 {
        log::warn!("{} line(s) could not be applied", summary.failed);
    }
    Ok(())
}
