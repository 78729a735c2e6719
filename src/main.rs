use std::{fs, path::PathBuf, process};

use clap::Parser;
use mp4faststart::{fast_start, ByteStore, FastStartError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Rewrites an MP4/QuickTime file for progressive playback by moving
/// the moov atom in front of the media data.
#[derive(Parser, Debug)]
#[command(version, about = "Move the moov atom to the front of an MP4 file")]
struct Args {
    /// Input MP4/MOV file
    input: PathBuf,
    /// Destination path for the rewritten file
    output: PathBuf,
    /// Log every atom classification and patched table
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = match args.verbose {
        true => "debug",
        false => "info",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(err) = run(&args) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), FastStartError> {
    let bytes = fs::read(&args.input)?;
    let mut store = ByteStore::from_vec(bytes)?;

    match fast_start(&mut store)? {
        Some(out) => {
            fs::write(&args.output, out.as_slice())?;
            info!("wrote {}", args.output.display());
        }
        None => info!("input is already fast start, no file written"),
    }

    Ok(())
}
