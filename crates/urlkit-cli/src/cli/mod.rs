//! CLI for urlkit.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use urlkit_core::config::{self, UrlkitConfig};

use commands::{
    run_completions, run_decode, run_encode, run_join, run_man, run_query_decode,
    run_query_encode, run_set, run_show,
};

/// Top-level CLI for urlkit.
#[derive(Debug, Parser)]
#[command(name = "urlkit")]
#[command(about = "urlkit: inspect, edit and merge URLs", long_about = None)]
pub struct Cli {
    /// Log everything at trace level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read configuration from PATH instead of ~/.config/urlkit/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print every component of a URL.
    Show {
        url: String,
        /// Print a JSON object instead of a table.
        #[arg(long)]
        json: bool,
        /// Text printed for absent components (overrides config).
        #[arg(long, value_name = "TEXT")]
        missing: Option<String>,
    },

    /// Merge relative `path?query` references onto a URL, in order.
    Join {
        url: String,
        #[arg(required = true, value_name = "PART")]
        parts: Vec<String>,
    },

    /// Change components of a URL and print the result.
    Set {
        url: String,
        #[command(flatten)]
        edits: SetArgs,
    },

    /// Query string codec.
    Query {
        #[command(subcommand)]
        action: QueryAction,
    },

    /// Percent-encode TEXT.
    Encode { text: String },

    /// Percent-decode TEXT.
    Decode { text: String },

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff).
    Man,
}

#[derive(Debug, Subcommand)]
pub enum QueryAction {
    /// Decode a query string into key/value pairs.
    Decode {
        raw: String,
        /// Print a JSON object instead of `key=value` lines.
        #[arg(long)]
        json: bool,
    },
    /// Build a query string from KEY=VALUE pairs.
    Encode {
        #[arg(required = true, value_name = "KEY=VALUE", value_parser = parse_pair)]
        pairs: Vec<(String, String)>,
    },
}

/// Component edits for `urlkit set`, applied in URL order.
#[derive(Debug, Default, Args)]
pub struct SetArgs {
    #[arg(long)]
    pub scheme: Option<String>,
    #[arg(long)]
    pub user: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    /// Login options (imap/pop3/smtp only).
    #[arg(long)]
    pub options: Option<String>,
    #[arg(long)]
    pub host: Option<String>,
    #[arg(long)]
    pub port: Option<u16>,
    #[arg(long)]
    pub path: Option<String>,
    /// Replace the whole query (repeatable).
    #[arg(long = "query", value_name = "KEY=VALUE", value_parser = parse_pair)]
    pub query: Vec<(String, String)>,
    /// Append one pair to the existing query (repeatable).
    #[arg(long = "add-query", value_name = "KEY=VALUE", value_parser = parse_pair)]
    pub add_query: Vec<(String, String)>,
    #[arg(long)]
    pub fragment: Option<String>,
}

/// Split `KEY=VALUE` at the first `=`. A bare `KEY` gets an empty value.
pub(crate) fn parse_pair(s: &str) -> Result<(String, String), String> {
    if s.is_empty() {
        return Err("expected KEY=VALUE".to_string());
    }
    let (key, value) = s.split_once('=').unwrap_or((s, ""));
    Ok((key.to_string(), value.to_string()))
}

impl Cli {
    fn load_config(&self) -> Result<UrlkitConfig> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        Ok(cfg)
    }

    pub fn run(self) -> Result<()> {
        match &self.command {
            CliCommand::Completions { shell } => return run_completions(*shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = self.load_config()?;

        match self.command {
            CliCommand::Show { url, json, missing } => {
                let missing = missing.unwrap_or(cfg.display.missing);
                run_show(&url, json, &missing)?
            }
            CliCommand::Join { url, parts } => run_join(&cfg, &url, &parts)?,
            CliCommand::Set { url, edits } => run_set(&cfg, &url, &edits)?,
            CliCommand::Query { action } => match action {
                QueryAction::Decode { raw, json } => run_query_decode(&cfg, &raw, json)?,
                QueryAction::Encode { pairs } => run_query_encode(&cfg, pairs)?,
            },
            CliCommand::Encode { text } => run_encode(&text),
            CliCommand::Decode { text } => run_decode(&text),
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
