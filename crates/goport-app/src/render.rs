//! Render use cases: Portfile text or JSON from in-memory bundles.

use anyhow::Context;
use goport_types::RecipeBundle;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Portfile,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "portfile" => Ok(OutputFormat::Portfile),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("unknown output format: {other} (expected portfile|json)"),
        }
    }
}

pub fn render_bundle(bundle: &RecipeBundle, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Portfile => Ok(goport_render::render_portfile(bundle)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(bundle).context("serialize bundle")?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Render several bundles into one document, in order.
///
/// JSON output is a single array so the result stays parseable.
pub fn render_bundles(bundles: &[RecipeBundle], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Portfile => {
            let rendered = bundles
                .iter()
                .map(|b| render_bundle(b, format))
                .collect::<anyhow::Result<Vec<_>>>()?;
            Ok(rendered.join("\n"))
        }
        OutputFormat::Json if bundles.len() == 1 => render_bundle(&bundles[0], format),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(bundles).context("serialize bundles")?;
            out.push('\n');
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goport_types::{ChecksumEntry, ChecksumRecord, Host, ResolvedIdentity, SCHEMA_BUNDLE_V1};

    fn sample_bundle(project: &str) -> RecipeBundle {
        let coordinate = format!("github.com/foo/{project}");
        RecipeBundle {
            schema: SCHEMA_BUNDLE_V1.to_string(),
            package_id: coordinate.clone(),
            alias: None,
            version: "v1.0.0".to_string(),
            identity: ResolvedIdentity {
                host: Host::GitHub,
                author: Some("foo".to_string()),
                project: project.to_string(),
                coordinate: coordinate.clone(),
                alias: None,
            },
            checksums: vec![ChecksumEntry {
                coordinate,
                checksum: ChecksumRecord::unavailable(),
            }],
            dependencies: Vec::new(),
        }
    }

    #[test]
    fn parses_output_format() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "portfile".parse::<OutputFormat>().unwrap(),
            OutputFormat::Portfile
        );
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn json_round_trips_the_bundle() {
        let bundle = sample_bundle("bar");
        let json = render_bundle(&bundle, OutputFormat::Json).unwrap();
        let back: RecipeBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bundle);
        assert!(json.contains("\"schema\": \"goport.bundle.v1\""));
    }

    #[test]
    fn several_json_bundles_form_an_array() {
        let json =
            render_bundles(&[sample_bundle("a"), sample_bundle("b")], OutputFormat::Json).unwrap();
        let back: Vec<RecipeBundle> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back[1].identity.project, "b");
    }

    #[test]
    fn portfiles_are_concatenated_in_order() {
        let text = render_bundles(
            &[sample_bundle("a"), sample_bundle("b")],
            OutputFormat::Portfile,
        )
        .unwrap();
        let a = text.find("github.com/foo/a 1.0.0 v").unwrap();
        let b = text.find("github.com/foo/b 1.0.0 v").unwrap();
        assert!(a < b);
    }
}
