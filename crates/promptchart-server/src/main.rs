mod cli;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use promptchart_ai::{OpenAiClient, OpenAiConfig};
use promptchart_common::{PromptChartError, Result};
use promptchart_config::{LogLevel, PromptChartConfig};
use promptchart_server::{start_server, ChartGenerator, GenerateRequest};

use crate::cli::{Args, Command};

/// Load environment variables from `.env` / `.env.local` (KEY=VALUE lines).
/// Variables already set in the environment win.
fn load_dotenv() {
    for path in [".env.local", ".env"] {
        let Ok(contents) = std::fs::read_to_string(path) else {
            continue;
        };
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"').trim_matches('\'');
                if std::env::var(key).is_err() {
                    std::env::set_var(key, value);
                }
            }
        }
    }
}

/// `--log-level`, then `RUST_LOG`, then the config file.
fn init_logging(cli_level: Option<&str>, config_level: LogLevel) {
    let filter = match cli_level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(config_level.as_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_generator(config: &PromptChartConfig) -> Result<ChartGenerator> {
    let client_config = OpenAiConfig::from_env(&config.llm.api_key_env)
        .map_err(|e| PromptChartError::Ai(e.to_string()))?
        .with_base_url(config.llm.base_url.clone())
        .with_model(config.llm.model.clone())
        .with_timeout(Duration::from_secs(config.llm.timeout_secs));

    let client = OpenAiClient::new(client_config).map_err(|e| PromptChartError::Ai(e.to_string()))?;
    Ok(ChartGenerator::new(Arc::new(client), config))
}

async fn run(args: Args, mut config: PromptChartConfig) -> Result<ExitCode> {
    match args.command() {
        Command::Config => {
            println!("{}", promptchart_config::config_to_json(&config));
            Ok(ExitCode::SUCCESS)
        }
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let generator = build_generator(&config)?;
            tracing::info!(
                model = %config.llm.model,
                max_data_points = config.limits.max_data_points,
                "promptchart starting"
            );
            start_server(&config.server, Arc::new(generator)).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Generate { prompt } => {
            let generator = build_generator(&config)?;
            let response = generator.generate(&GenerateRequest::from_prompt(prompt)).await;
            let json = serde_json::to_string_pretty(&response)
                .map_err(|e| PromptChartError::Server(format!("failed to encode response: {e}")))?;
            println!("{json}");
            Ok(if response.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn main() -> ExitCode {
    // Before the runtime starts any threads.
    load_dotenv();

    let args = cli::parse();

    let config = match promptchart_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("promptchart: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(args.log_level.as_deref(), config.logging.level);

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "failed to start async runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args, config)) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "promptchart exited with an error");
            eprintln!("promptchart: {e}");
            ExitCode::FAILURE
        }
    }
}
