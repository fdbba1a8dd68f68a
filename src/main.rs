use anyhow::Result;
use clap::Parser;
use proclog::{
    cli::Args,
    collector::{LinuxProcessCollector, ProcessCollector},
    config::Config,
    writer::LogWriter,
};
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

async fn logging_loop(
    writer: &LogWriter,
    collector: &impl ProcessCollector,
    interval: Duration,
    poll: Duration,
) {
    let mut ticker = tokio::time::interval(poll);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut next_due = Instant::now() + interval;

    loop {
        ticker.tick().await;
        if Instant::now() < next_due {
            continue;
        }

        // One cycle: scan, then write. No await in here, so an interrupt
        // is only observed back at the tick above.
        let records = collector.list_processes();
        if let Err(e) = writer.write_snapshot(&records) {
            error!("Failed to write log: {}", e);
        }
        next_due = Instant::now() + interval;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = Config::config_path();
    let config = if config_path.exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        })
    } else {
        Config::default()
    };

    let args = Args::parse();
    let settings = args.resolve(&config)?;

    let collector = LinuxProcessCollector::new();
    let writer = LogWriter::new(&settings.directory, config.output.filename_prefix.as_str());
    let interval = Duration::from_secs(settings.interval_minutes.saturating_mul(60));
    let poll = Duration::from_secs(config.schedule.poll_secs.max(1));

    info!(
        "Logging started: one snapshot every {} minute(s) into '{}'",
        settings.interval_minutes,
        settings.directory.display()
    );
    info!("Press Ctrl+C to stop");

    tokio::select! {
        _ = logging_loop(&writer, &collector, interval, poll) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Logging stopped by user");
        }
    }

    Ok(())
}
