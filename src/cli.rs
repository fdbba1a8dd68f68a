//! Command-line arguments and interactive fallback prompts

use crate::config::Config;
use anyhow::{ensure, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Directory where log files are stored
    pub directory: Option<PathBuf>,

    /// Interval between snapshots, in minutes
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,
}

/// Fully resolved startup settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub directory: PathBuf,
    pub interval_minutes: u64,
}

impl Args {
    /// Resolve each value from the command line, then the config file,
    /// then an interactive prompt.
    pub fn resolve(self, config: &Config) -> Result<Settings> {
        let directory = match self.directory.or_else(|| config.output.directory.clone()) {
            Some(dir) => dir,
            None => PathBuf::from(prompt_line("Enter folder name to store logs:")?),
        };
        ensure!(
            !directory.as_os_str().is_empty(),
            "log folder name must not be empty"
        );

        let interval_minutes = match self.interval.or(config.schedule.interval_minutes) {
            Some(minutes) => minutes,
            None => parse_interval(&prompt_line("Enter time interval (in minutes):")?)?,
        };
        ensure!(
            interval_minutes >= 1,
            "interval must be a positive number of minutes"
        );

        Ok(Settings {
            directory,
            interval_minutes,
        })
    }
}

pub fn parse_interval(input: &str) -> Result<u64> {
    let minutes: u64 = input
        .trim()
        .parse()
        .context("interval must be a whole number of minutes")?;
    ensure!(minutes >= 1, "interval must be at least one minute");
    Ok(minutes)
}

fn prompt_line(prompt: &str) -> io::Result<String> {
    println!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
