use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use glasspane::Config;
use log::info;
use std::path::PathBuf;

/// Glasspane - a frameless, translucent pane you move by dragging its body
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Window width
    #[arg(long)]
    width: Option<u32>,

    /// Window height
    #[arg(long)]
    height: Option<u32>,

    /// Keep the pane above other windows
    #[arg(long)]
    always_on_top: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    config.window.always_on_top |= args.always_on_top;
    config.validate()?;

    if args.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    // Initialize logging
    let log_level = if args.debug { "debug" } else { config.general.log_level.as_str() };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("Starting Glasspane v{}", env!("CARGO_PKG_VERSION"));

    glasspane::window::run(config)?;

    Ok(())
}
