//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::config::Config;
use crate::consts::{
    DEFAULT_API_BASE, DEFAULT_LISTINGS_PATH, DEFAULT_OWNER, DEFAULT_REPO, DEFAULT_TIMEOUT_SECS,
};
use crate::output::OutputOptions;
use crate::remote::RemoteRepo;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "ttm")]
#[command(about = "Browse a remotely hosted year/month/day event timeline", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Base URL of the contents API
    #[arg(long, global = true, value_name = "URL")]
    pub(crate) api_base: Option<String>,

    /// Repository owner holding the timeline data
    #[arg(long, global = true)]
    pub(crate) owner: Option<String>,

    /// Repository holding the timeline data
    #[arg(long, global = true)]
    pub(crate) repo: Option<String>,

    /// Directory of YYYY-MM.json listing files inside the repository
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) path: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub(crate) timeout: Option<u64>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Compact output (no descriptions in event lists)
    #[arg(short = 'c', long, global = true)]
    pub(crate) compact: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (show fetch and navigation details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Only print warnings and errors on stderr
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI is false (default)
        if !self.compact && config.compact {
            self.compact = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = color;
        }

        // String options: only apply if CLI didn't set them
        if self.api_base.is_none() {
            self.api_base = config.api_base.clone();
        }
        if self.owner.is_none() {
            self.owner = config.owner.clone();
        }
        if self.repo.is_none() {
            self.repo = config.repo.clone();
        }
        if self.path.is_none() {
            self.path = config.listings_path.clone();
        }
        if self.timeout.is_none() {
            self.timeout = config.timeout_secs;
        }

        self
    }

    fn color_enabled(&self, is_terminal: bool) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => is_terminal,
        }
    }

    pub(crate) fn use_color(&self) -> bool {
        self.color_enabled(std::io::stdout().is_terminal())
    }

    /// Same rules as `use_color`, checked against stderr where logs go
    pub(crate) fn use_stderr_color(&self) -> bool {
        self.color_enabled(std::io::stderr().is_terminal())
    }

    pub(crate) fn output_options(&self) -> OutputOptions {
        OutputOptions {
            use_color: self.use_color(),
            compact: self.compact,
            json: self.json,
        }
    }

    pub(crate) fn remote_repo(&self) -> RemoteRepo {
        RemoteRepo {
            api_base: self
                .api_base
                .clone()
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            owner: self
                .owner
                .clone()
                .unwrap_or_else(|| DEFAULT_OWNER.to_string()),
            repo: self.repo.clone().unwrap_or_else(|| DEFAULT_REPO.to_string()),
            listings_path: self
                .path
                .clone()
                .unwrap_or_else(|| DEFAULT_LISTINGS_PATH.to_string()),
        }
    }

    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
