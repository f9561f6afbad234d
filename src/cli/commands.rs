//! CLI command implementations

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Read;
use std::path::Path;

use crate::brief::{stamp_meeting_id, BriefGenerator, BriefOutcome, BriefRequest};
use crate::cli::args::{Cli, ConfigCommand};
use crate::config::Settings;
use crate::llm::build_provider;

/// Run the HTTP service, with optional address overrides from the command line.
pub async fn serve(settings: &Settings, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    crate::server::serve(&settings).await
}

/// Generate a single brief from a request file and print it.
pub async fn generate_brief(settings: &Settings, input: &Path) -> Result<()> {
    let request = read_request(input)?;
    request.validate()?;

    let generator = BriefGenerator::new(build_provider(settings)?);
    let outcome = generator
        .generate(
            &request.meeting_title,
            &request.meeting_time,
            &request.attendees,
        )
        .await;

    if let BriefOutcome::Degraded { reason, .. } = &outcome {
        eprintln!("Research unavailable, showing fallback brief ({})", reason);
    }

    let document = stamp_meeting_id(outcome.into_document(), &request.meeting_id);
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}

fn read_request(input: &Path) -> Result<BriefRequest> {
    let content = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read brief request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read brief request: {}", input.display()))?
    };

    serde_json::from_str(&content).context("Invalid brief request JSON")
}

/// Configuration management
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(&settings.redacted())?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Print completion script for the requested shell to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let command_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, command_name, &mut std::io::stdout());
}
