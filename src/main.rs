use anyhow::Result;
use thrift_sig::builder::TypeBuilder;
use thrift_sig::classifier::TypeRegistry;
use thrift_sig::cli::{Cli, Commands};
use thrift_sig::config::Config;
use thrift_sig::parser::{parse_type_expr, SynIntrospector};
use thrift_sig::pipeline::Pipeline;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    init_logging(cli.verbose());

    match cli.command {
        Commands::Generate { config, verbose } => {
            run_generate(&config, verbose)?;
        }
        Commands::Init { output, force } => {
            run_init(&output, force)?;
        }
        Commands::Signature {
            type_expr,
            structs,
            enums,
            max_depth,
        } => {
            run_signature(&type_expr, &structs, &enums, max_depth)?;
        }
    }

    Ok(())
}

/// Log to stderr; RUST_LOG overrides the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the generate command
fn run_generate(config_path: &std::path::Path, verbose: bool) -> Result<()> {
    let config = Config::load(config_path)?;

    if verbose {
        println!("Loaded configuration from: {}", config_path.display());
    }

    let pipeline = Pipeline::new(verbose);
    let report = pipeline.run(&config)?;

    if !report.skipped.is_empty() {
        eprintln!(
            "Warning: {} field(s) skipped, see [[skipped]] in {}",
            report.skipped.len(),
            config.output.signatures_file.display()
        );
    }

    Ok(())
}

/// Run the init command
fn run_init(output_path: &std::path::Path, force: bool) -> Result<()> {
    if output_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    let config = Config::default_config();
    config.save(output_path)?;

    println!("Created configuration file: {}", output_path.display());
    println!("\nEdit the file to configure:");
    println!("  - source_dir: Path to your Rust source files");
    println!("  - signatures_file: Output path for the signature report");
    println!("  - exclude: Directories to skip during scanning");
    println!("  - [types.aliases]: Extra Rust type -> Thrift type mappings");

    Ok(())
}

/// Run the signature command
fn run_signature(
    type_expr: &str,
    structs: &[String],
    enums: &[String],
    max_depth: usize,
) -> Result<()> {
    let mut registry = TypeRegistry::with_builtins();
    for name in structs {
        registry.register_struct(name)?;
    }
    for name in enums {
        registry.register_enum(name)?;
    }

    let ty = parse_type_expr(type_expr)?;
    let tree = TypeBuilder::new(SynIntrospector, &registry)
        .with_max_depth(max_depth)
        .build(&ty)?;

    println!("wire:    {}", tree.render_wire());
    println!("display: {}", tree.render_display());

    Ok(())
}
