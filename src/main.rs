use anyhow::Result;
use offboard::{config::Config, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;
    log::info!("starting offboard for {}", config.account.user_email);

    ui::run_app(config).await?;

    Ok(())
}
