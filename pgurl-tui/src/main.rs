use std::{env, fs::OpenOptions};

use pgurl_core::Config;
use ui::UrlBuilderUI;
mod ui;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Also loads .env, which may carry RUST_LOG
    let config = Config::load();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "off");
    }

    // stdout belongs to the terminal UI
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    log::info!("Starting pgurl");

    let mut tui = UrlBuilderUI::new(&config);
    tui.run_ui().await?;

    log::info!("pgurl finished");
    Ok(())
}
