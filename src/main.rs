use clap::Parser;
use std::io::Write;

use bmp_ascii::cli::{self, Args, Command, ConfigAction};
use bmp_ascii::config::{self, Config, RenderSettings};
use bmp_ascii::{logging, pipeline};

fn main() {
    // Load .env before parsing so BMP_ASCII_* variables can come from it.
    // dotenv::dotenv() returns Err if .env doesn't exist, which is fine
    let _ = dotenv::dotenv();

    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = args.config.clone().unwrap_or_else(config::default_path);

    // An explicitly requested config file must exist
    if args.config.is_some() && !config_path.exists() {
        return Err(format!("Config file not found: {}", config_path.display()).into());
    }

    match &args.command {
        Some(Command::Config {
            action: ConfigAction::Init,
        }) => {
            let path = cli::init_config(&config_path)?;
            println!("Created config file: {}", path.display());
            return Ok(());
        }
        Some(Command::Config {
            action: ConfigAction::Show,
        }) => {
            let cfg = Config::load(Some(config_path.as_path()))?;
            let settings = RenderSettings::resolve(args.overrides(), &cfg)?;
            cli::show_config(&settings, &config_path);
            return Ok(());
        }
        None => {}
    }

    let cfg = Config::load(Some(config_path.as_path()))?;
    let settings = RenderSettings::resolve(args.overrides(), &cfg)?;
    log::debug!("Resolved settings: {:?}", settings);

    let quiet = args.quiet;
    let rendering = pipeline::run_with_progress(&settings, |status| {
        if !quiet {
            eprintln!("{}", status);
        }
    })?;

    // Nothing reaches stdout until the whole pipeline has succeeded
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(rendering.text.as_bytes())?;
    out.flush()?;
    Ok(())
}
