use std::io::Read;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use resumescope_core::client::{BackendClient, ClientConfig, ContactMessage};
use resumescope_core::report::{
    model::{Report, ToolInfo},
    render,
};
use resumescope_core::{Analyzer, report_from_payload};

mod args;

use args::{Command, OutputArgs, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resumescope_core=info,resumescope_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = args::Args::parse();

    match &args.command {
        Command::Analyze {
            resume_path,
            content_type,
            output,
        } => {
            let client = BackendClient::new(client_config(&args)?)?;
            let mut analyzer = Analyzer::new(client, tool_info(output));
            let report = analyzer
                .analyze(resume_path, content_type.as_deref())
                .await?;
            emit(&report, output)
        }
        Command::Normalize {
            payload_path,
            output,
        } => {
            let report = normalize_payload(payload_path, tool_info(output))?;
            emit(&report, output)
        }
        Command::Contact {
            name,
            email,
            message,
        } => {
            let client = BackendClient::new(client_config(&args)?)?;
            let response = client
                .send_contact(&ContactMessage {
                    name: name.clone(),
                    email: email.clone(),
                    message: message.clone(),
                })
                .await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Command::Health => {
            let client = BackendClient::new(client_config(&args)?)?;
            let health = client.health().await?;
            println!("{}", serde_json::to_string_pretty(&health)?);
            Ok(())
        }
    }
}

fn client_config(args: &args::Args) -> Result<ClientConfig> {
    let mut config = ClientConfig::new(&args.backend_url)?;
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    tracing::debug!(backend = %config.base_url, timeout = ?config.timeout, "client configured");
    Ok(config)
}

fn tool_info(output: &OutputArgs) -> ToolInfo {
    ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: output.commit.clone(),
    }
}

fn normalize_payload(path: &Path, tool: ToolInfo) -> Result<Report> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read payload from stdin")?;
        return report_from_payload("<stdin>", None, &bytes, tool);
    }

    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read payload: {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    report_from_payload(&file_name, Some(path.display().to_string()), &bytes, tool)
}

fn emit(report: &Report, output: &OutputArgs) -> Result<()> {
    let rendered = match output.format {
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Text => render::render_text(report),
    };

    match &output.out {
        Some(path) => std::fs::write(path, &rendered)
            .with_context(|| format!("failed to write report: {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}
