use std::{
    io::{self, Write},
    sync::Arc,
};

use anyhow::Context;
use clap::Parser;

use entity_gen::{
    cli::Cli,
    commands,
    config::{AppConfig, defaults::DEFAULT_RUST_LOG},
    db::connection,
    logging::init_tracing,
    render::DoctrineEntityRenderer,
    services::EntityService,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("entity generation failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            init_tracing(DEFAULT_RUST_LOG);
            return Err(err);
        }
    };
    init_tracing(&cfg.logging.rust_log);

    let database = cfg.database_with_url(cli.database_url.as_deref())?;
    let introspector = connection::connect(&database).await?;
    let service = EntityService::new(
        Arc::new(introspector),
        Arc::new(DoctrineEntityRenderer::new()),
    );

    let output = commands::dispatch(cli.command, &cfg, &service).await?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}").context("failed to write output")?;
    Ok(())
}
