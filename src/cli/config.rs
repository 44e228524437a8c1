//! Configuration management commands.

use clap::{Args, Subcommand};

use crate::cli::common::{to_json, CliError, CliResult};
use crate::config::Config;
use crate::content::Language;
use crate::views::DetailPresentation;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Default)]
pub struct ConfigSetArgs {
    /// Host the server binds to
    #[arg(long)]
    host: Option<String>,

    /// Port the server listens on
    #[arg(long)]
    port: Option<u16>,

    /// Language used when a request names none (en, jp, ua)
    #[arg(long, value_name = "LANG")]
    default_language: Option<Language>,

    /// How gallery cards open a project (modal or page)
    #[arg(long, value_name = "MODE")]
    detail: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            println!("{}", to_json(&config)?);
            return Ok(());
        }

        let path = Config::config_file_path()
            .map_or_else(|_| "(unavailable)".to_string(), |p| p.display().to_string());
        println!("Config file: {path}");
        println!();
        println!("Server:");
        println!("  Address: {}", config.bind_address());
        println!();
        println!("Site:");
        println!("  Default language: {}", config.site.default_language);
        println!(
            "  Detail presentation: {}",
            presentation_name(config.site.detail_presentation)
        );
        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        self.apply(&mut config)?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }

    /// Applies the given options to `config` and validates the result.
    fn apply(&self, config: &mut Config) -> CliResult<()> {
        if self.host.is_none()
            && self.port.is_none()
            && self.default_language.is_none()
            && self.detail.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --host, --port, --default-language or --detail",
            ));
        }

        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(lang) = self.default_language {
            config.site.default_language = lang;
        }
        if let Some(detail) = &self.detail {
            config.site.detail_presentation = match detail.to_lowercase().as_str() {
                "modal" => DetailPresentation::Modal,
                "page" => DetailPresentation::Page,
                _ => {
                    return Err(CliError::validation(
                        "Invalid detail presentation. Must be 'modal' or 'page'",
                    ))
                }
            };
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))
    }
}

const fn presentation_name(presentation: DetailPresentation) -> &'static str {
    match presentation {
        DetailPresentation::Modal => "modal",
        DetailPresentation::Page => "page",
    }
}
