//! The `get` use case: turn (package, version) pairs into recipe bundles.

use anyhow::Context;
use goport_checksum::{ArchiveRole, archive_url, checksum_or_unavailable, compute_checksum};
use goport_fetch::Fetcher;
use goport_identity::resolve_identity;
use goport_manifest::DependencyExtractor;
use goport_settings::EffectiveConfig;
use goport_types::{
    ChecksumEntry, ChecksumRecord, DependencyRecord, PortError, RecipeBundle, SCHEMA_BUNDLE_V1,
};

/// One package to resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageRequest {
    pub coordinate: String,
    pub version: String,
}

impl PackageRequest {
    pub fn new(coordinate: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            coordinate: coordinate.into(),
            version: version.into(),
        }
    }
}

/// Knobs of the resolution pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Replace checksum failures with the sentinel record instead of failing the package.
    pub best_effort: bool,
    /// Subdirectory holding the lock file, relative to the repository root.
    pub manifest_dir: Option<String>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            best_effort: true,
            manifest_dir: None,
        }
    }
}

impl From<&EffectiveConfig> for PipelineOptions {
    fn from(cfg: &EffectiveConfig) -> Self {
        Self {
            best_effort: cfg.best_effort,
            manifest_dir: cfg.manifest_dir.clone(),
        }
    }
}

/// Group positional `<package> <version>` arguments into requests.
pub fn pair_arguments(args: &[String]) -> anyhow::Result<Vec<PackageRequest>> {
    if args.is_empty() || args.len() % 2 != 0 {
        anyhow::bail!(
            "expected <package> <version> pairs, got {} argument(s)",
            args.len()
        );
    }
    Ok(args
        .chunks_exact(2)
        .map(|pair| PackageRequest::new(&pair[0], &pair[1]))
        .collect())
}

/// Resolve one package into a bundle.
///
/// Only the package's own identity is fatal. Dependencies that cannot be resolved or
/// downloaded get placeholder checksums, unless `best_effort` is off, in which case
/// archive failures are returned.
pub fn resolve_package(
    fetcher: &dyn Fetcher,
    request: &PackageRequest,
    opts: &PipelineOptions,
) -> Result<RecipeBundle, PortError> {
    let version = request.version.as_str();
    let identity = resolve_identity(fetcher, &request.coordinate, version)?;
    tracing::debug!(
        coordinate = %request.coordinate,
        resolved = %identity.coordinate,
        "identity resolved"
    );

    let dependencies = DependencyExtractor::default().extract(
        fetcher,
        &identity,
        version,
        opts.manifest_dir.as_deref(),
    );

    let primary = archive_url(&identity, version, ArchiveRole::Primary)
        .and_then(|url| compute_checksum(fetcher, &identity.coordinate, &url));
    let mut checksums = vec![ChecksumEntry {
        coordinate: identity.coordinate.clone(),
        checksum: degrade(primary, &identity.coordinate, opts)?,
    }];

    for dependency in &dependencies {
        checksums.push(ChecksumEntry {
            coordinate: dependency.name.clone(),
            checksum: dependency_checksum(fetcher, dependency, opts)?,
        });
    }

    Ok(RecipeBundle {
        schema: SCHEMA_BUNDLE_V1.to_string(),
        package_id: identity.coordinate.clone(),
        alias: identity.alias.clone(),
        version: version.to_string(),
        identity,
        checksums,
        dependencies,
    })
}

/// Resolve every request in order, stopping at the first fatal error.
pub fn resolve_batch(
    fetcher: &dyn Fetcher,
    requests: &[PackageRequest],
    opts: &PipelineOptions,
) -> anyhow::Result<Vec<RecipeBundle>> {
    requests
        .iter()
        .map(|request| {
            resolve_package(fetcher, request, opts)
                .with_context(|| format!("resolve {} {}", request.coordinate, request.version))
        })
        .collect()
}

fn dependency_checksum(
    fetcher: &dyn Fetcher,
    dependency: &DependencyRecord,
    opts: &PipelineOptions,
) -> Result<ChecksumRecord, PortError> {
    let identity = match resolve_identity(fetcher, &dependency.name, &dependency.version) {
        Ok(identity) => identity,
        Err(err) => {
            tracing::warn!(
                dependency = %dependency.name,
                "{err}; using placeholder checksums"
            );
            return Ok(ChecksumRecord::unavailable());
        }
    };
    let result = archive_url(&identity, &dependency.version, ArchiveRole::Vendored)
        .and_then(|url| compute_checksum(fetcher, &dependency.name, &url));
    degrade(result, &dependency.name, opts)
}

fn degrade(
    result: Result<ChecksumRecord, PortError>,
    coordinate: &str,
    opts: &PipelineOptions,
) -> Result<ChecksumRecord, PortError> {
    match result {
        Err(err) if !opts.best_effort => Err(err),
        result => Ok(checksum_or_unavailable(result, coordinate)),
    }
}
