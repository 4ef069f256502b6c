//! identicon - render the identicon of a string to PNG.

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use identicon_renderer::{Identicon, RenderOptions};

#[derive(Parser)]
#[command(name = "identicon")]
#[command(about = "Render the identicon of a string as PNG")]
#[command(version)]
struct Cli {
    /// String to derive the identicon from (email, username, ...)
    input: Option<String>,

    /// JSON file with render options; flags below override it
    #[arg(long)]
    options: Option<PathBuf>,

    /// Side of the image in pixels
    #[arg(short, long)]
    size: Option<u32>,

    /// Fraction of the size used as border, in [0, 1)
    #[arg(long)]
    border_ratio: Option<f64>,

    /// Ink color overriding the hash color (hex); repeat to pick at random
    #[arg(short, long = "color")]
    colors: Vec<String>,

    /// Background color (hex, e.g. "#ffffff")
    #[arg(short, long)]
    background: Option<String>,

    /// Write the PNG to this file instead of stdout
    #[arg(short, long, conflicts_with = "data_uri")]
    output: Option<PathBuf>,

    /// Print a data URI instead of raw PNG bytes
    #[arg(long)]
    data_uri: bool,

    /// Print the grid and colors instead of an image
    #[arg(long, conflicts_with_all = ["output", "data_uri"])]
    inspect: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let identicon = Identicon::from_input(cli.input.as_deref())?;
    let options = build_options(&cli)?;

    if cli.inspect {
        let fingerprint = identicon.fingerprint();
        println!("hash:  {}", fingerprint.digest());
        println!("color: {}", fingerprint.color());
        println!("{}", fingerprint.grid());
        return Ok(());
    }

    if cli.data_uri {
        println!("{}", identicon.data_uri(&options)?);
        return Ok(());
    }

    match cli.output {
        Some(path) => {
            fs::write(&path, identicon.png_data(&options)?)?;
            log::info!("saved identicon to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            identicon.write_png(&options, &mut stdout)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn build_options(cli: &Cli) -> Result<RenderOptions, Box<dyn Error>> {
    let options = match &cli.options {
        Some(path) => RenderOptions::from_json(&fs::read_to_string(path)?)?,
        None => RenderOptions::default(),
    };
    Ok(apply_flags(options, cli))
}

/// Overrides the loaded options with every flag given on the command line.
fn apply_flags(mut options: RenderOptions, cli: &Cli) -> RenderOptions {
    if let Some(size) = cli.size {
        options.size = size;
    }
    if let Some(border_ratio) = cli.border_ratio {
        options = options.with_border_ratio(border_ratio);
    }
    if !cli.colors.is_empty() {
        options = options.with_palette(cli.colors.iter().cloned());
    }
    if let Some(background) = &cli.background {
        options = options.with_background(background.clone());
    }
    options
}

// ============================================================================
// Tests
// ============================================================================
