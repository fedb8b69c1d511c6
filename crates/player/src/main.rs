//! Real Life RPG - console widget binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rlrpg_player::config::PlayerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so the console stays readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rlrpg_player=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Real Life RPG");

    let config = PlayerConfig::from_env();
    rlrpg_player::runner::run(config).await
}
