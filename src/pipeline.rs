//! Pipeline - scan, register, build and report

use anyhow::{Context, Result};
use std::fs;
use tracing::{debug, info, warn};

use crate::builder::TypeBuilder;
use crate::classifier::TypeRegistry;
use crate::config::Config;
use crate::error::BuildError;
use crate::models::{ParseResult, ThriftStruct};
use crate::parser::{find_type_param, parse_items, SynIntrospector};
use crate::report::{FieldSignature, SignatureReport, SkippedField, StructSignatures};
use crate::scanner::Scanner;

/// Runs signature generation for a configuration
pub struct Pipeline {
    verbose: bool,
}

impl Pipeline {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Scan sources, build every field signature and write the report
    pub fn run(&self, config: &Config) -> Result<SignatureReport> {
        let parsed = self.parse_sources(config)?;
        let registry = build_registry(config, &parsed)?;
        let report = self.collect_signatures(config, &parsed, &registry)?;

        report.save(&config.output.signatures_file)?;

        info!(
            structs = report.structs.len(),
            fields = report.field_count(),
            skipped = report.skipped.len(),
            "wrote signature report"
        );
        if self.verbose {
            println!(
                "Wrote {} signatures for {} structs to {}",
                report.field_count(),
                report.structs.len(),
                config.output.signatures_file.display()
            );
        }

        Ok(report)
    }

    fn parse_sources(&self, config: &Config) -> Result<ParseResult> {
        let scanner = Scanner::new(
            config.input.source_dir.clone(),
            config.input.exclude.clone(),
        );
        let files = scanner.scan()?;

        if self.verbose {
            println!("Found {} Rust files", files.len());
        }

        let mut parsed = ParseResult::new();
        for file in &files {
            let content = fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let result = parse_items(&content, file)
                .with_context(|| format!("Failed to parse {}", file.display()))?;
            parsed.merge(result);
        }

        if parsed.is_empty() {
            warn!(dir = %config.input.source_dir.display(), "no Thrift types found");
        }

        Ok(parsed)
    }

    fn collect_signatures(
        &self,
        config: &Config,
        parsed: &ParseResult,
        registry: &TypeRegistry,
    ) -> Result<SignatureReport> {
        let builder = TypeBuilder::new(SynIntrospector, registry)
            .with_max_depth(config.builder.max_depth);
        let mut report = SignatureReport::new();

        for item in &parsed.structs {
            let signatures = self.struct_signatures(item, &builder, config, &mut report)?;
            report.structs.push(signatures);
        }

        Ok(report)
    }

    fn struct_signatures(
        &self,
        item: &ThriftStruct,
        builder: &TypeBuilder<SynIntrospector, &TypeRegistry>,
        config: &Config,
        report: &mut SignatureReport,
    ) -> Result<StructSignatures> {
        let mut fields = Vec::with_capacity(item.fields.len());

        for field in &item.fields {
            let built = match find_type_param(&field.ty, &item.generics) {
                Some(param) => Err(BuildError::unsupported(format!(
                    "generic parameter `{}`",
                    param
                ))),
                None => builder.build(&field.ty),
            };
            match built {
                Ok(tree) => {
                    debug!(
                        struct_name = %item.name,
                        field = %field.name,
                        depth = tree.depth(),
                        "built field signature"
                    );
                    if self.verbose {
                        println!("  {}.{}: {}", item.name, field.name, tree.render_wire());
                    }
                    fields.push(FieldSignature {
                        name: field.name.clone(),
                        wire: tree.render_wire(),
                        display: tree.render_display(),
                    });
                }
                Err(err) if config.builder.strict => {
                    return Err(err).with_context(|| {
                        format!(
                            "Failed to build {}.{} ({})",
                            item.name,
                            field.name,
                            item.source_file.display()
                        )
                    });
                }
                Err(err) => {
                    warn!(
                        struct_name = %item.name,
                        field = %field.name,
                        error = %err,
                        "skipping field"
                    );
                    report.skipped.push(SkippedField {
                        struct_name: item.name.clone(),
                        field: field.name.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        Ok(StructSignatures {
            name: item.name.clone(),
            source_file: item.source_file.clone(),
            fields,
        })
    }
}

/// Registry with built-ins, configured aliases and every scanned type
pub fn build_registry(config: &Config, parsed: &ParseResult) -> Result<TypeRegistry> {
    let mut registry = TypeRegistry::with_builtins();

    for (rust, wire) in &config.types.aliases {
        registry
            .register_alias(rust, wire)
            .with_context(|| format!("Invalid alias for '{}'", rust))?;
    }
    for item in &parsed.enums {
        warn_if_shadowing(&registry, &item.name);
        if item.is_union() {
            registry.register_struct(&item.name)?;
        } else {
            registry.register_enum(&item.name)?;
        }
    }
    for item in &parsed.structs {
        warn_if_shadowing(&registry, &item.name);
        registry.register_struct(&item.name)?;
    }

    Ok(registry)
}

fn warn_if_shadowing(registry: &TypeRegistry, name: &str) {
    if registry.contains(name) {
        warn!(name, "scanned type replaces an existing mapping");
    }
}
