use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use apod::app::AppContext;
use apod::cli::{commands, Cli};
use apod::config::{Config, API_KEY_ENV};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::load_from(path)?;
            config.apply_env(std::env::var(API_KEY_ENV).ok());
            config
        }
        None => Config::load()?,
    };
    cli.apply_to(&mut config);

    let intent = cli.intent_fields().into_intent()?.with_thumbs(config.thumbs);
    let ctx = AppContext::new(config);

    // Records go to stdout; download progress goes to stderr.
    let results = commands::fetch(&ctx, &intent, cli.json, &mut std::io::stdout()).await?;

    if cli.download {
        commands::download(&ctx, &results, cli.dest.as_deref(), &mut std::io::stderr()).await?;
    }

    Ok(())
}
