use anyhow::Result;
use clap::Parser;
use position_portal::core::{ConfigManager, PortalClient};
use position_portal::environment::ProfileConfig;
use position_portal::logging;
use position_portal::portal_cli::{handle_portal_command, PortalCli};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = PortalCli::parse();

    let config = ConfigManager::load(&cli.config)?;
    logging::init(config.log_level, config.log_file.as_deref())?;

    info!("Starting position portal against {}", config.api.base_url);
    if cli.config.exists() {
        info!(
            "Loaded {} profile from {}",
            ProfileConfig::get_environment(),
            cli.config.display()
        );
    } else {
        info!("No profile file at {}, using defaults", cli.config.display());
    }

    let client = PortalClient::new(&config.api)?;

    handle_portal_command(cli.command, &config, &client).await
}
