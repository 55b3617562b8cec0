use std::{
    io::{self, BufRead},
    path::PathBuf,
    process::exit,
};

use clap::Parser;
use log::{error, info, warn};
use moving_average::{MovingAverage, WindowConfig};

/// Reads one number per line from stdin and prints the moving average after each
#[derive(Parser, Debug)]
struct Args {
    /// Number of samples in the averaging window
    #[arg(short, long, default_value = "10")]
    window: usize,

    /// TOML file with the window settings, takes precedence over `--window`
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => WindowConfig::load(path).unwrap_or_else(|e| {
            error!("Failed to load window config '{}': {e}", path.display());
            exit(1);
        }),
        None => WindowConfig {
            max_length: args.window,
        },
    };

    let mut average = MovingAverage::<f64>::from_config(config).unwrap_or_else(|e| {
        error!("Invalid window: {e}");
        exit(1);
    });

    info!("Averaging over the last {} samples", average.max_len());

    for (line_no, line) in io::stdin().lock().lines().enumerate() {
        let line = line.unwrap_or_else(|e| {
            error!("Failed to read stdin: {e}");
            exit(1);
        });
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.parse::<f64>() {
            Ok(sample) => {
                average.push(sample);
                println!("{}", average.value());
            }
            Err(e) => warn!("Skipping line {}: '{line}' ({e})", line_no + 1),
        }
    }
}
