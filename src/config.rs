use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::builder::DEFAULT_MAX_DEPTH;
use crate::classifier::TypeRegistry;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub builder: BuilderConfig,
    #[serde(default)]
    pub types: TypesConfig,
}

/// Input configuration - where to find Rust source files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Directory to scan for Rust files
    pub source_dir: PathBuf,
    /// Directory or file names to exclude from scanning
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Output configuration - where to write the signature report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path for the generated TOML signature report
    pub signatures_file: PathBuf,
}

/// Tree builder settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Maximum number of nested parameterized levels
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Abort on the first field that cannot be built instead of skipping it
    #[serde(default)]
    pub strict: bool,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            strict: false,
        }
    }
}

/// Extra type mappings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TypesConfig {
    /// Rust type name -> Thrift wire name (e.g. `Uuid = "string"`)
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if !self.input.source_dir.exists() {
            anyhow::bail!(
                "Source directory does not exist: {}",
                self.input.source_dir.display()
            );
        }

        if self.builder.max_depth == 0 {
            anyhow::bail!("builder.max_depth must be at least 1");
        }

        let mut registry = TypeRegistry::new();
        for (rust, wire) in &self.types.aliases {
            registry
                .register_alias(rust, wire)
                .with_context(|| format!("Invalid alias for '{}'", rust))?;
        }

        // Ensure the output directory exists or can be created
        if let Some(parent) = self.output.signatures_file.parent() {
            if !parent.exists() && !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
        }

        Ok(())
    }

    /// Generate a default configuration
    pub fn default_config() -> Self {
        Config {
            input: InputConfig {
                source_dir: PathBuf::from("src"),
                exclude: vec!["tests".to_string(), "target".to_string()],
            },
            output: OutputConfig {
                signatures_file: PathBuf::from("thrift/signatures.toml"),
            },
            builder: BuilderConfig::default(),
            types: TypesConfig::default(),
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
