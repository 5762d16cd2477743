//! CLI entry point.
//!
//! Loads `.env`, parses arguments, installs logging, then bootstraps the
//! context a command needs and dispatches to its handler.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use iconsmith_cli::handlers::generate::GenerateArgs;
use iconsmith_cli::presentation::render_notification;
use iconsmith_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads ICONSMITH_API_URL
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        match err.downcast_ref::<CliError>() {
            Some(CliError::Generation(message)) => eprintln!("{}", render_notification(message)),
            _ => eprintln!("Error: {err:#}"),
        }
        std::process::exit(CliError::exit_code_for(&err));
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_env()
        .with_api_url(cli.api_url)
        .with_print_urls(cli.no_browser);

    match command {
        Commands::Styles => handlers::styles::execute(),
        Commands::Generate {
            topic,
            colors,
            style,
            out,
            open,
        } => {
            let export = out.is_some();
            let ctx = bootstrap(config.with_output_dir(out.unwrap_or_else(|| PathBuf::from("."))))?;
            let args = GenerateArgs {
                topic,
                colors,
                style,
                export,
                open,
            };
            handlers::generate::execute(&ctx, args).await
        }
        Commands::Export { url, name, out } => {
            let ctx = bootstrap(config.with_output_dir(out))?;
            handlers::export::execute(&ctx, &url, &name).await
        }
        Commands::View { url } => {
            let ctx = bootstrap(config)?;
            handlers::view::execute(&ctx, &url)
        }
        Commands::Studio { out } => {
            let ctx = bootstrap(config.with_output_dir(out))?;
            handlers::studio::execute(&ctx).await
        }
    }
}
