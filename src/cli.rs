//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::config::{ArticleConfig, DefaultSelection, ReaderConfig};

/// Output format for `--print-settings`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML format (default)
    #[default]
    Yaml,
    /// JSON format
    Json,
    /// TOML config snippet
    Toml,
}

/// Terminal article reader with an adjustable presentation settings panel.
#[derive(Parser, Debug, Serialize)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Plain-text article to read (first line is the title)
    #[arg(short, long, value_name = "FILE")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<PathBuf>,

    /// Default font family (option value, e.g. "Ubuntu")
    #[arg(long, value_name = "VALUE")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Default font size (option value, e.g. "25px")
    #[arg(long, value_name = "VALUE")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,

    /// Default font color (option value, e.g. "#000000")
    #[arg(long, value_name = "VALUE")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,

    /// Default background color (option value, e.g. "#FFFFFF")
    #[arg(long, value_name = "VALUE")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// Default content width (option value, e.g. "948px")
    #[arg(long, value_name = "VALUE")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_width: Option<String>,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE")]
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Print the resolved default settings and exit
    #[arg(long)]
    #[serde(skip)]
    pub print_settings: bool,

    /// Output format for --print-settings
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    #[serde(skip)]
    pub format: OutputFormat,

    /// Log file path (default: folio.log)
    #[arg(long, value_name = "FILE")]
    #[serde(skip)]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    #[serde(skip)]
    pub log_level: String,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    #[serde(skip)]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// Convert flat CLI args to nested ReaderConfig for Figment merging.
    ///
    /// Only fields that are explicitly set on the CLI end up in the
    /// serialized overrides (via `skip_serializing_if`), so TOML values
    /// survive unless the CLI replaces them.
    pub fn to_config_overrides(&self) -> ReaderConfig {
        ReaderConfig {
            article: ArticleConfig {
                path: self.article.clone(),
            },
            defaults: DefaultSelection {
                font_family: self.font_family.clone(),
                font_size: self.font_size.clone(),
                font_color: self.font_color.clone(),
                background_color: self.background_color.clone(),
                content_width: self.content_width.clone(),
            },
        }
    }
}
