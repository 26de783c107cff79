use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// promptchart: describe a chart in plain language, get an ECharts option.
#[derive(Parser, Debug)]
#[command(name = "promptchart", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error or a full filter).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (the default).
    Serve {
        /// Bind address, overriding `[server] host`.
        #[arg(long)]
        host: Option<String>,

        /// Port, overriding `[server] port`.
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Generate one chart and print the response envelope as JSON.
    Generate {
        /// Natural-language description of the chart.
        prompt: String,
    },
    /// Print the effective configuration as JSON.
    Config,
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            host: None,
            port: None,
        })
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve() {
        let args = Args::parse_from(["promptchart"]);
        assert_eq!(
            args.command(),
            Command::Serve {
                host: None,
                port: None
            }
        );
    }

    #[test]
    fn generate_with_global_flags() {
        let args = Args::parse_from([
            "promptchart",
            "generate",
            "用柱状图展示：1月100",
            "--log-level",
            "debug",
            "--config",
            "/tmp/pc.toml",
        ]);
        assert_eq!(
            args.command(),
            Command::Generate {
                prompt: "用柱状图展示：1月100".into()
            }
        );
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/pc.toml")));
    }

    #[test]
    fn config_subcommand() {
        let args = Args::parse_from(["promptchart", "config"]);
        assert_eq!(args.command(), Command::Config);
    }

    #[test]
    fn serve_overrides() {
        let args = Args::parse_from(["promptchart", "serve", "--port", "8080"]);
        assert_eq!(
            args.command(),
            Command::Serve {
                host: None,
                port: Some(8080)
            }
        );
    }
}
