use anyhow::anyhow;
use dotenv::dotenv;
use hac_api::api;
use hac_api::config::HacConfig;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `.env` is optional; real environment variables win.
    dotenv().ok();

    let config = HacConfig::from_env().map_err(|err| anyhow!(err.to_string()))?;

    TermLogger::init(
        config.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    api::serve(config).await
}
