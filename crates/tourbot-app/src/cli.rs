//! CLI argument definitions for the TourBot binaries.
//!
//! Uses `clap` with derive macros. Priority resolution:
//! CLI args > env vars > config file > defaults.

use std::path::{Path, PathBuf};

use clap::Parser;

/// TourBot, a retrieval-augmented travel assistant for France.
#[derive(Parser, Debug)]
#[command(name = "tourbot", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Data directory holding the index snapshot.
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > TOURBOT_CONFIG env var > ~/.tourbot/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("TOURBOT_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > TOURBOT_PORT env var > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Ok(val) = std::env::var("TOURBOT_PORT") {
            if let Ok(p) = val.parse::<u16>() {
                return p;
            }
        }
        config_port
    }

    /// Resolve the log level. Returns `None` if not overridden on the CLI.
    pub fn resolve_log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
}

/// Corpus builder arguments.
#[derive(Parser, Debug)]
#[command(name = "tourbot-ingest", version, about)]
pub struct IngestArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Data directory to write the index snapshot into.
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Pre-fetched documents to ingest (.txt, .md, or .html).
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

impl IngestArgs {
    /// Same resolution as the server: flag > env var > platform default.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("TOURBOT_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }
}

/// Default config file path: ~/.tourbot/config.toml.
pub fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".tourbot").join("config.toml");
    }
    PathBuf::from("config.toml")
}

/// Resolve the data directory, expanding a leading `~` against $HOME and
/// applying a CLI override when present.
pub fn resolve_data_dir(configured: &str, cli_override: Option<&Path>) -> PathBuf {
    if let Some(dir) = cli_override {
        return dir.to_path_buf();
    }
    if let Some(rest) = configured.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(configured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_flag_wins() {
        let args = CliArgs {
            config: None,
            port: Some(9999),
            data_dir: None,
            log_level: None,
        };
        assert_eq!(args.resolve_port(7070), 9999);
    }

    #[test]
    fn test_port_falls_back_to_config() {
        let args = CliArgs {
            config: None,
            port: None,
            data_dir: None,
            log_level: None,
        };
        assert_eq!(args.resolve_port(7070), 7070);
    }

    #[test]
    fn test_config_flag_wins() {
        let args = CliArgs {
            config: Some(PathBuf::from("/tmp/custom.toml")),
            port: None,
            data_dir: None,
            log_level: None,
        };
        assert_eq!(args.resolve_config_path(), PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn test_data_dir_cli_override_wins() {
        let dir = resolve_data_dir("~/.tourbot/data", Some(Path::new("/var/tourbot")));
        assert_eq!(dir, PathBuf::from("/var/tourbot"));
    }

    #[test]
    fn test_data_dir_plain_path_passthrough() {
        let dir = resolve_data_dir("/opt/tourbot/data", None);
        assert_eq!(dir, PathBuf::from("/opt/tourbot/data"));
    }
}
