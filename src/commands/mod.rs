pub mod generate;
pub mod list;

use std::io::{self, IsTerminal};

use anyhow::Result;

use crate::{cli::Commands, config::AppConfig, prompt::TerminalPrompt, services::EntityService};

/// Runs one command and returns what belongs on stdout.
pub async fn dispatch(command: Commands, cfg: &AppConfig, service: &EntityService) -> Result<String> {
    match command {
        Commands::Generate(args) => {
            let interactive =
                !args.non_interactive && io::stdin().is_terminal() && io::stderr().is_terminal();
            let mut prompt = interactive.then(TerminalPrompt::new);
            generate::run(args, cfg, service, prompt.as_mut()).await
        }
        Commands::Schemas => list::schemas(service).await,
        Commands::Tables(args) => list::tables(args, cfg, service).await,
    }
}

/// Schema from the command line, then configuration, then the connection's
/// current schema.
pub(crate) async fn default_schema(
    explicit: Option<String>,
    cfg: &AppConfig,
    service: &EntityService,
) -> Result<Option<String>> {
    if let Some(schema) = explicit.or_else(|| cfg.generator.default_schema.clone()) {
        return Ok(Some(schema));
    }
    Ok(service.current_schema().await?)
}
