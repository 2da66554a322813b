use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use primeclock::config::DEFAULT_CACHE_PATH;
use primeclock::{
    Animator, CacheConfig, ChartConfig, ClockTime, OutputFormat, PrimeClock, SystemClock, Written,
};

#[derive(Parser)]
#[command(name = "primeclock")]
#[command(version, about = "Draw a clock time as prime factor fingerprints on a polar chart")]
struct Cli {
    /// Hour hand in 24h format. 0 0 0 means the current time
    #[arg(allow_negative_numbers = true)]
    hours: i32,

    /// Minute hand
    #[arg(allow_negative_numbers = true)]
    minutes: i32,

    /// Second hand
    #[arg(allow_negative_numbers = true)]
    seconds: i32,

    /// Output image; a .gif extension renders an animation
    #[arg(short, long, default_value = "prime_time.png")]
    output: PathBuf,

    /// Recompute the decomposition table before use
    #[arg(long)]
    rebuild: bool,

    /// Decomposition table location
    #[arg(long, default_value = DEFAULT_CACHE_PATH)]
    cache: PathBuf,

    /// Frames in an animation
    #[arg(long, default_value_t = 10)]
    frames: usize,

    /// TrueType/OpenType font for chart text
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> Result<()> {
    // logs go to stderr, the table owns stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // reject an unusable output path before touching the cache
    OutputFormat::from_path(&cli.output)?;
    let cache = CacheConfig::builder()
        .rebuild(cli.rebuild)
        .cache_path(cli.cache)
        .build();
    let chart = ChartConfig::builder().maybe_font_path(cli.font).build();
    let animator = Animator::builder().frames(cli.frames).build();

    let clock = PrimeClock::open(&cache, chart, animator).with_context(|| {
        format!(
            "could not prepare the decomposition table at {} (run with --rebuild to create it)",
            cache.cache_path.display()
        )
    })?;

    let time = ClockTime::new(cli.hours, cli.minutes, cli.seconds).normalize(&SystemClock);
    info!("{time}");

    if let Some(table) = clock.table_for_output(time, &cli.output)? {
        println!("{table}");
    }

    let written = clock
        .write(time, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    if let Written::Animation { frames } = written {
        info!(frames, "animation complete");
    }

    Ok(())
}
