//! Developer tasks (schema generation, fixture checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use goport_manifest::{
    GlideLockProbe, GlockfileProbe, GoSumProbe, GopkgLockProbe, ManifestProbe,
};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(manifest_dir)
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_bundle_schema() -> schemars::Schema {
    schema_for!(goport_types::RecipeBundle)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(goport_settings::GoportConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "goport.bundle.v1.json",
            generate: generate_bundle_schema,
        },
        SchemaSpec {
            filename: "goport.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }
        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    for name in &missing {
        eprintln!("  missing: {name}");
    }
    for name in &mismatched {
        eprintln!("  out of date: {name}");
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Validate every `tests/fixtures/bundles/*.json` against the bundle schema.
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_bundle_schema()).context("schema to JSON")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile bundle schema: {e}"))?;

    let dir = fixtures_dir().join("bundles");
    let mut count = 0;
    let mut errors = Vec::new();
    for entry in fs::read_dir(&dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }
        let name = path.display().to_string();
        let content = fs::read_to_string(&path).with_context(|| format!("Failed to read {name}"))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {name} as JSON"))?;
        for err in validator.iter_errors(&value) {
            errors.push(format!("{name}: {err}"));
        }
        // Renderers rely on one checksum per dependency after the primary one.
        let checksums = value["checksums"].as_array().map_or(0, Vec::len);
        let dependencies = value["dependencies"].as_array().map_or(0, Vec::len);
        if checksums != dependencies + 1 {
            errors.push(format!(
                "{name}: {checksums} checksums for {dependencies} dependencies"
            ));
        }
        count += 1;
    }

    if !errors.is_empty() {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!("{} bundle fixture error(s)", errors.len());
    }
    println!("{count} bundle fixture(s) conform");
    Ok(())
}

/// Parse each lock-file fixture with its probe.
fn check_fixtures() -> anyhow::Result<()> {
    let probes: [&dyn ManifestProbe; 4] =
        [&GoSumProbe, &GlideLockProbe, &GopkgLockProbe, &GlockfileProbe];
    let dir = fixtures_dir().join("manifests");
    for probe in probes {
        let path = dir.join(probe.file_name());
        let raw = fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        let deps = probe
            .parse(&raw)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        if deps.is_empty() {
            bail!("{} yields no dependencies", path.display());
        }
        println!("{}: {} dependencies", probe.file_name(), deps.len());
    }
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate bundle fixtures against the bundle schema");
    eprintln!("  check-fixtures    Parse every lock-file fixture with its probe");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "check-fixtures" => check_fixtures(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
