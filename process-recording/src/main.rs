use std::{path::PathBuf, time::Instant};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use steps::{ProcessingConfig, StepsProcessor};

mod input;
mod trace;

/// Sample rates the energy filters have been designed for.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SampleRate
{
    #[value(name = "100")]
    Hz100,
    #[value(name = "256")]
    Hz256,
}

impl SampleRate {
    fn config(self) -> ProcessingConfig {
        match self {
            SampleRate::Hz100 => ProcessingConfig::default(),
            SampleRate::Hz256 => ProcessingConfig::sampled_at_256hz(),
        }
    }
}

/// Compute step count, length and height of a recorded walk.
#[derive(Debug, Parser)]
#[command(version)]
struct Args
{
    /// Recording to process, JSON or CSV with columns ax,ay,az (g) and gx,gy,gz (deg/s).
    input: PathBuf,

    /// Rate in Hz the recording was sampled at.
    #[arg(long, value_enum, default_value_t = SampleRate::Hz100)]
    rate: SampleRate,

    /// Directory to write the intermediate buffers to as CSV files.
    #[arg(long)]
    trace: Option<PathBuf>,

    /// Log more, repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let samples = input::read_recording(&args.input)?;
    let processor = StepsProcessor::new(args.rate.config())?;

    let start = Instant::now();
    let (metrics, trace) = processor.process_with_trace(&samples)
        .with_context(|| format!("Can't process {}", args.input.display()))?;
    let elapsed = start.elapsed();

    println!("Calculation time: {:?}", elapsed);
    println!("Average step length: {} m", metrics.average_length);
    println!("Average step height: {} m", metrics.average_height);
    println!("Steps count: {}", metrics.steps_count);

    if let Some(dir) = &args.trace {
        trace::write_trace(dir, &trace, processor.config().sample_period())?;
    }

    Ok(())
}
