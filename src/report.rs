//! Signature report - the TOML file written by `thrift-sig generate`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Every signature produced by one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignatureReport {
    #[serde(default)]
    pub structs: Vec<StructSignatures>,
    #[serde(default)]
    pub skipped: Vec<SkippedField>,
}

/// Field signatures of one struct, in declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructSignatures {
    pub name: String,
    pub source_file: PathBuf,
    #[serde(default)]
    pub fields: Vec<FieldSignature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSignature {
    pub name: String,
    /// Canonical wire signature (`list<map<string, i32>>`)
    pub wire: String,
    /// Debug form (`<<Stringi32>>`)
    pub display: String,
}

/// A field whose type could not be turned into a signature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedField {
    pub struct_name: String,
    pub field: String,
    pub reason: String,
}

impl SignatureReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a struct by name
    pub fn find(&self, name: &str) -> Option<&StructSignatures> {
        self.structs.iter().find(|s| s.name == name)
    }

    /// Total number of field signatures
    pub fn field_count(&self) -> usize {
        self.structs.iter().map(|s| s.fields.len()).sum()
    }

    /// Load a report from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read report: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse report: {}", path.display()))
    }

    /// Save the report as TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize signature report")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;

        Ok(())
    }
}

impl StructSignatures {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldSignature> {
        self.fields.iter().find(|f| f.name == name)
    }
}
