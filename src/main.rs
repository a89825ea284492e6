use microblog::{Config, Result};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "microblog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting microblog");
    tracing::info!("Web server will listen on: {}", config.web_addr());

    let store = microblog::db::MongoStore::connect(&config.mongodb_uri).await?;
    let state = microblog::web::AppState::new(Arc::new(store));

    microblog::web::serve(config.web_addr(), state).await?;

    Ok(())
}
