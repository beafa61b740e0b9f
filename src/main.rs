/// Stratus - cloud storage backend view layer
use anyhow::Context;
use stratus::{config::ServerConfig, server, AppContext};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::from_env().context("failed to load configuration")?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("stratus={},tower_http=debug", config.logging.level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    print_banner();

    // Create application context
    let ctx = AppContext::new(config).context("failed to initialize application context")?;

    server::serve(ctx).await.context("server terminated")?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
   _____ __             __
  / ___// /__________ _/ /___  _______
  \__ \/ __/ ___/ __ `/ __/ / / / ___/
 ___/ / /_/ /  / /_/ / /_/ /_/ (__  )
/____/\__/_/   \__,_/\__/\__,_/____/

        Cloud storage view layer v{}
        "#,
        env!("CARGO_PKG_VERSION")
    );
}
