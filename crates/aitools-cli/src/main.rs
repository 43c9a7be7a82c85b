//! CLI entry point - the composition root.
//!
//! Parses arguments, bootstraps the context and routes to handlers. Errors
//! that map to a [`CliError`] set the process exit code.

use aitools_cli::handlers::list::ListArgs;
use aitools_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(&CliConfig::from_cli(&cli))?;

    match command {
        Commands::List {
            filter,
            page,
            page_size,
            json,
        } => {
            let args = ListArgs {
                filter: filter.clone(),
                page: *page,
                page_size: *page_size,
                json: *json,
            };
            handlers::list::execute(&ctx, &args).await?;
        }
        Commands::Pull { name } => handlers::pull::execute(&ctx, name).await?,
        Commands::Rm { name } => handlers::remove::execute(&ctx, name).await?,
        Commands::Show { name } => handlers::show::execute(&ctx, name).await?,
        Commands::Log { name } => handlers::log::execute(&ctx, name).await?,
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads its `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
