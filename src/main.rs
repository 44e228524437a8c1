//! folio - multilingual portfolio site server
//!
//! Serves the portfolio over HTTP and offers headless commands for
//! checking and inspecting the embedded content.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::cli::{CheckArgs, CliError, ConfigArgs, ProjectsArgs, ShowArgs};

/// folio - multilingual UI/UX portfolio
#[derive(Parser, Debug)]
#[command(name = folio::branding::APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the web server
    #[cfg(feature = "web")]
    Serve(ServeArgs),
    /// Validate the embedded content
    Check(CheckArgs),
    /// List projects
    Projects(ProjectsArgs),
    /// Print a resolved case study as JSON
    Show(ShowArgs),
    /// Show or change the configuration
    Config(ConfigArgs),
}

/// Server options; flags override the config file.
#[cfg(feature = "web")]
#[derive(clap::Args, Debug)]
struct ServeArgs {
    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[cfg(feature = "web")]
fn serve(args: &ServeArgs) -> anyhow::Result<()> {
    use anyhow::Context;
    use folio::config::Config;
    use tracing::info;

    let mut config = Config::load()?;
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    let addr: std::net::SocketAddr = config
        .bind_address()
        .parse()
        .context(format!("Invalid bind address: {}", config.bind_address()))?;

    info!("Config: {}", Config::config_file_path()?.display());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(folio::web::run_server(config, addr))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn report(result: Result<(), CliError>) {
    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        #[cfg(feature = "web")]
        Command::Serve(args) => serve(&args)?,
        Command::Check(args) => report(args.execute()),
        Command::Projects(args) => report(args.execute()),
        Command::Show(args) => report(args.execute()),
        Command::Config(args) => report(args.execute()),
    }

    Ok(())
}
