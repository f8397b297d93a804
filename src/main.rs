//! RF Cascade - interactive impedance calculator
//!
//! Builds a cascade of capacitors, inductors, resistors and transmission
//! lines in front of a load and reports the impedance, reflection coefficient
//! and SWR seen at the source end.
//!
//! # Usage
//!
//! ```bash
//! rfcascade --load "30-40j" --frequency 100e6 --reference 50
//! RUST_LOG=debug rfcascade
//! ```

use std::io;

use clap::Parser;
use rfcascade_core::{
    error::Result,
    notation::parse_impedance,
    shell::{Shell, ShellOptions},
};
use tracing_subscriber::EnvFilter;

/// Cascaded RF network impedance calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Load impedance, e.g. "50+0j" (prompted for when omitted)
    #[arg(short, long)]
    load: Option<String>,

    /// Operating frequency in Hz (prompted for when omitted)
    #[arg(short, long)]
    frequency: Option<f64>,

    /// Reference impedance for reflection coefficient and SWR
    #[arg(short, long, default_value = "50+0j")]
    reference: String,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let options = ShellOptions {
        load: args.load.as_deref().map(parse_impedance).transpose()?,
        frequency: args.frequency,
        reference_impedance: parse_impedance(&args.reference)?,
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout());
    shell.run(&options)?;

    Ok(())
}
