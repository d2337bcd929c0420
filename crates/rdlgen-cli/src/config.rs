//! `rdlgen.toml` parsing and validation

use crate::logging::LogLevel;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "rdlgen.toml";

/// Narrowest comment block that still leaves room for words after the margin
pub const MIN_COMMENT_WIDTH: usize = 20;

/// rdlgen.toml structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorSection,
    pub java: JavaSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSection {
    /// Tool name written into generated file headers
    pub banner: String,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            banner: "rdlgen".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JavaSection {
    /// Package namespace; the schema namespace is used when empty
    pub namespace: String,

    /// Root resource path; derived from the schema name when empty
    pub base_path: String,

    /// Output root; `./target/generated-sources/java` when empty
    pub output_dir: String,

    pub comment_width: usize,

    /// Whether to emit the error and exception boilerplate classes
    pub generate_artifacts: bool,
}

impl Default for JavaSection {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            base_path: String::new(),
            output_dir: String::new(),
            comment_width: 80,
            generate_artifacts: true,
        }
    }
}

impl Config {
    /// Load config from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {:?}", path.as_ref()))
    }

    /// Parse config from a TOML string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Load the given config file, or `./rdlgen.toml` if it exists, or the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<()> {
        if self.generator.banner.trim().is_empty() {
            anyhow::bail!("Generator banner cannot be empty");
        }

        self.log_level()?;

        if self.java.comment_width < MIN_COMMENT_WIDTH {
            anyhow::bail!(
                "Comment width must be at least {}, got {}",
                MIN_COMMENT_WIDTH,
                self.java.comment_width
            );
        }

        if !self.java.base_path.is_empty() && !self.java.base_path.starts_with('/') {
            anyhow::bail!(
                "Base path must start with '/', got '{}'",
                self.java.base_path
            );
        }

        Ok(())
    }

    /// The configured log level
    pub fn log_level(&self) -> Result<LogLevel> {
        self.generator
            .log_level
            .parse()
            .context("Invalid generator.log_level")
    }
}
