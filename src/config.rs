//! Configuration management for the RUT checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Project configuration discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::cli::Command;
use crate::form::{FormSchema, Messages};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".rut-check.toml";

/// Command-line arguments for the RUT checker
#[derive(Debug, Parser)]
#[command(name = "rut-check")]
#[command(about = "Validate Chilean RUT numbers and hostel form submissions")]
#[command(version)]
pub struct Args {
    /// Project configuration file
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level, overridden by RUST_LOG
    #[arg(
        long,
        global = true,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Contents of a configuration file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectConfig {
    pub form: FormSchema,
    pub messages: Messages,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Field declarations for form validation
    pub form: FormSchema,
    /// Messages attached to rejected fields
    pub messages: Messages,
    /// Output format for command results
    pub format: OutputFormat,
    /// File the project settings came from, if any
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            form: FormSchema::default(),
            messages: Messages::default(),
            format: OutputFormat::Text,
            config_path: None,
        }
    }
}

impl Config {
    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: &Args) -> Result<Self> {
        let config_path = match &args.config {
            Some(path) => Some(path.clone()),
            None => Self::discover_config_file(Path::new(".")),
        };

        let project = match &config_path {
            Some(path) => Self::load_project_config(path)?,
            None => ProjectConfig::default(),
        };

        Ok(Config {
            form: project.form,
            messages: project.messages,
            format: args.format,
            config_path,
        })
    }

    /// Read and parse a configuration file
    pub fn load_project_config(path: &Path) -> Result<ProjectConfig> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let project: ProjectConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        log::info!("Loaded configuration from {}", path.display());
        Ok(project)
    }

    /// Look for a project file in `dir`, then in the user config directory
    pub fn discover_config_file(dir: &Path) -> Option<PathBuf> {
        let local = dir.join(PROJECT_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }

        let user = dirs::config_dir()?.join("rut-check").join("config.toml");
        if user.is_file() {
            log::debug!("Using user configuration {}", user.display());
            return Some(user);
        }

        None
    }

    pub fn has_project_config(&self) -> bool {
        self.config_path.is_some()
    }
}
