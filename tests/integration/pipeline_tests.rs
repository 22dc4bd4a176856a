//! Integration tests for the full pipeline

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use thrift_sig::config::{BuilderConfig, Config, InputConfig, OutputConfig, TypesConfig};
use thrift_sig::pipeline::Pipeline;
use thrift_sig::report::SignatureReport;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(path).expect("Failed to read fixture")
}

/// Create a test config with temp directories
fn create_test_config(source_dir: PathBuf, output_dir: &Path) -> Config {
    Config {
        input: InputConfig {
            source_dir,
            exclude: vec!["tests".to_string(), "target".to_string()],
        },
        output: OutputConfig {
            signatures_file: output_dir.join("signatures.toml"),
        },
        builder: BuilderConfig::default(),
        types: TypesConfig::default(),
    }
}

/// Copy fixtures into a fresh source tree
fn source_tree(files: &[&str]) -> (tempfile::TempDir, PathBuf, PathBuf) {
    let temp = tempdir().unwrap();
    let src_dir = temp.path().join("src");
    let output_dir = temp.path().join("generated");
    fs::create_dir_all(&src_dir).unwrap();
    fs::create_dir_all(&output_dir).unwrap();

    for name in files {
        fs::write(src_dir.join(name), fixture(name)).unwrap();
    }

    (temp, src_dir, output_dir)
}

#[test]
fn test_full_pipeline_orders() {
    let (_temp, src_dir, output_dir) = source_tree(&["orders.rs"]);
    let config = create_test_config(src_dir, &output_dir);

    let report = Pipeline::new(false).run(&config).unwrap();

    let order = report.find("Order").unwrap();
    assert_eq!(order.field("id").unwrap().wire, "i64");
    assert_eq!(order.field("status").unwrap().wire, "OrderStatus");
    assert_eq!(order.field("lines").unwrap().wire, "list<OrderLine>");
    assert_eq!(order.field("lines").unwrap().display, "<OrderLine>");
    assert_eq!(order.field("tags").unwrap().wire, "set<string>");
    assert_eq!(order.field("notes").unwrap().wire, "string");
    assert!(order.field("cache_key").is_none());

    let ledger = report.find("Ledger").unwrap();
    assert_eq!(
        ledger.field("by_customer").unwrap().wire,
        "map<string, list<Order>>"
    );
    assert_eq!(
        ledger.field("totals").unwrap().wire,
        "map<i64, map<string, double>>"
    );
    assert_eq!(ledger.field("totals").unwrap().display, "<i64<Stringf64>>");
    assert_eq!(ledger.field("archive").unwrap().wire, "list<list<Order>>");

    let receipt = report.find("Receipt").unwrap();
    assert_eq!(receipt.field("payment").unwrap().wire, "Payment");

    assert!(report.find("Internal").is_none());
    assert!(report.skipped.is_empty());
}

#[test]
fn test_report_written_and_readable() {
    let (_temp, src_dir, output_dir) = source_tree(&["orders.rs"]);
    let config = create_test_config(src_dir, &output_dir);

    let report = Pipeline::new(false).run(&config).unwrap();

    let signatures_file = output_dir.join("signatures.toml");
    assert!(signatures_file.exists());

    let content = fs::read_to_string(&signatures_file).unwrap();
    assert!(content.contains("[[structs]]"));
    assert!(content.contains("name = \"Ledger\""));

    assert_eq!(SignatureReport::load(&signatures_file).unwrap(), report);
}

#[test]
fn test_pipeline_resolves_module_paths() {
    let (_temp, src_dir, output_dir) = source_tree(&["nested_modules.rs"]);
    let config = create_test_config(src_dir, &output_dir);

    let report = Pipeline::new(false).run(&config).unwrap();

    let statement = report.find("Statement").unwrap();
    assert_eq!(statement.field("invoices").unwrap().wire, "list<Invoice>");
    assert_eq!(
        statement.field("by_region").unwrap().wire,
        "map<Region, list<Invoice>>"
    );
}

#[test]
fn test_unsupported_fields_are_skipped() {
    let (_temp, src_dir, output_dir) = source_tree(&["unsupported.rs"]);
    let config = create_test_config(src_dir, &output_dir);

    let report = Pipeline::new(false).run(&config).unwrap();

    let telemetry = report.find("Telemetry").unwrap();
    let built: Vec<_> = telemetry.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(built, vec!["name", "samples"]);

    let skipped: Vec<_> = report
        .skipped
        .iter()
        .map(|s| (s.struct_name.as_str(), s.field.as_str()))
        .collect();
    assert_eq!(
        skipped,
        vec![
            ("Telemetry", "started"),
            ("Telemetry", "window"),
            ("Page", "items"),
        ]
    );
    assert!(report.skipped[0].reason.contains("Instant"));
    assert!(report.skipped[1].reason.contains("tuple"));
    assert!(report.skipped[2].reason.contains("generic parameter `T`"));

    let page = report.find("Page").unwrap();
    assert_eq!(page.field("cursor").unwrap().wire, "string");
}

#[test]
fn test_aliases_from_config() {
    let (_temp, src_dir, output_dir) = source_tree(&["unsupported.rs"]);
    let mut config = create_test_config(src_dir, &output_dir);
    config.types = TypesConfig {
        aliases: BTreeMap::from([("Instant".to_string(), "i64".to_string())]),
    };

    let report = Pipeline::new(false).run(&config).unwrap();

    let telemetry = report.find("Telemetry").unwrap();
    assert_eq!(telemetry.field("started").unwrap().wire, "i64");
    assert_eq!(telemetry.field("started").unwrap().display, "<>");
}

#[test]
fn test_qualified_alias_from_config() {
    let (_temp, src_dir, output_dir) = source_tree(&["unsupported.rs"]);
    let mut config = create_test_config(src_dir, &output_dir);
    config.types = TypesConfig {
        aliases: BTreeMap::from([("std::time::Instant".to_string(), "i64".to_string())]),
    };

    let report = Pipeline::new(false).run(&config).unwrap();

    let telemetry = report.find("Telemetry").unwrap();
    assert_eq!(telemetry.field("started").unwrap().wire, "i64");
}

#[test]
fn test_strict_mode_fails_run() {
    let (_temp, src_dir, output_dir) = source_tree(&["unsupported.rs"]);
    let mut config = create_test_config(src_dir, &output_dir);
    config.builder.strict = true;

    let result = Pipeline::new(false).run(&config);

    assert!(result.is_err());
    assert!(!output_dir.join("signatures.toml").exists());
}

#[test]
fn test_depth_limit_from_config() {
    let (_temp, src_dir, output_dir) = source_tree(&["orders.rs"]);
    let mut config = create_test_config(src_dir, &output_dir);
    config.builder.max_depth = 1;

    let report = Pipeline::new(false).run(&config).unwrap();

    let skipped: Vec<_> = report.skipped.iter().map(|s| s.field.as_str()).collect();
    assert_eq!(skipped, vec!["by_customer", "totals", "archive"]);
    assert!(report.skipped[0].reason.contains("limit of 1"));
}

#[test]
fn test_excluded_directories_ignored() {
    let (_temp, src_dir, output_dir) = source_tree(&["orders.rs"]);
    let excluded = src_dir.join("tests");
    fs::create_dir_all(&excluded).unwrap();
    fs::write(
        excluded.join("extra.rs"),
        "#[derive(Thrift)] pub struct OnlyInTests { pub x: i32 }",
    )
    .unwrap();
    let config = create_test_config(src_dir, &output_dir);

    let report = Pipeline::new(false).run(&config).unwrap();

    assert!(report.find("OnlyInTests").is_none());
    assert!(report.find("Order").is_some());
}

#[test]
fn test_empty_source_dir() {
    let (_temp, src_dir, output_dir) = source_tree(&[]);
    let config = create_test_config(src_dir, &output_dir);

    let report = Pipeline::new(false).run(&config).unwrap();

    assert!(report.structs.is_empty());
    assert!(output_dir.join("signatures.toml").exists());
}

#[test]
fn test_invalid_source_fails() {
    let (_temp, src_dir, output_dir) = source_tree(&[]);
    fs::write(src_dir.join("broken.rs"), "pub struct {").unwrap();
    let config = create_test_config(src_dir, &output_dir);

    let err = Pipeline::new(false).run(&config).unwrap_err();

    assert!(err.to_string().contains("broken.rs"));
}
