use clap::Parser;
use log::info;

use ecobloom::{App, Cli, Config, Result};

pub fn initialize_logger(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    info!("Logger initialized");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = Config::source(cli.config.as_deref())?;
    let mut config = Config::load_from(source.as_deref())?;
    cli.apply_to(&mut config);

    initialize_logger(config.debug);
    info!("Application starting up");
    match &source {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    App::new(config).run().await?;

    info!("Application shutting down");
    Ok(())
}
