use crate::{
    GlideLockProbe, GlockfileProbe, GoSumProbe, GopkgLockProbe, ManifestProbe, raw_file_url,
};
use goport_fetch::Fetcher;
use goport_types::{DependencyRecord, PortError, ResolvedIdentity};

/// Dependencies found by the first probe that succeeded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extraction {
    pub file: &'static str,
    pub dependencies: Vec<DependencyRecord>,
}

/// Ordered list of lock file probes.
pub struct DependencyExtractor {
    probes: Vec<Box<dyn ManifestProbe>>,
}

impl Default for DependencyExtractor {
    /// go.sum, glide.lock, Gopkg.lock, GLOCKFILE.
    fn default() -> Self {
        Self::new(vec![
            Box::new(GoSumProbe),
            Box::new(GlideLockProbe),
            Box::new(GopkgLockProbe),
            Box::new(GlockfileProbe),
        ])
    }
}

impl DependencyExtractor {
    pub fn new(probes: Vec<Box<dyn ManifestProbe>>) -> Self {
        Self { probes }
    }

    pub fn probes(&self) -> &[Box<dyn ManifestProbe>] {
        &self.probes
    }

    /// Try each probe in order and return the first success.
    ///
    /// Individual probe failures are logged at debug level and never returned; only
    /// exhausting every probe is an error.
    pub fn try_extract(
        &self,
        fetcher: &dyn Fetcher,
        identity: &ResolvedIdentity,
        version: &str,
        dir: Option<&str>,
    ) -> Result<Extraction, PortError> {
        for probe in &self.probes {
            match run_probe(probe.as_ref(), fetcher, identity, version, dir) {
                Ok(dependencies) => {
                    tracing::debug!(
                        coordinate = %identity.coordinate,
                        file = probe.file_name(),
                        count = dependencies.len(),
                        "dependencies found"
                    );
                    return Ok(Extraction {
                        file: probe.file_name(),
                        dependencies,
                    });
                }
                Err(err) => {
                    tracing::debug!(coordinate = %identity.coordinate, "{err}");
                }
            }
        }
        Err(PortError::AllManifestsExhausted {
            coordinate: identity.coordinate.clone(),
            version: version.to_string(),
        })
    }

    /// Like [`try_extract`](Self::try_extract), but a package without any lock file simply
    /// has no dependencies.
    pub fn extract(
        &self,
        fetcher: &dyn Fetcher,
        identity: &ResolvedIdentity,
        version: &str,
        dir: Option<&str>,
    ) -> Vec<DependencyRecord> {
        match self.try_extract(fetcher, identity, version, dir) {
            Ok(extraction) => extraction.dependencies,
            Err(err) => {
                tracing::warn!("{err}; continuing without dependencies");
                Vec::new()
            }
        }
    }
}

fn run_probe(
    probe: &dyn ManifestProbe,
    fetcher: &dyn Fetcher,
    identity: &ResolvedIdentity,
    version: &str,
    dir: Option<&str>,
) -> Result<Vec<DependencyRecord>, PortError> {
    let file = probe.file_name();
    let url = raw_file_url(identity, version, dir, file)
        .map_err(|e| PortError::manifest_not_found(file, e.to_string()))?;
    let response = fetcher
        .get(&url)
        .map_err(|e| PortError::manifest_not_found(file, format!("GET {url}: {e:#}")))?;
    if !response.is_ok() {
        return Err(PortError::manifest_not_found(
            file,
            format!("HTTP status {} for {url}", response.status),
        ));
    }
    probe.parse(&response.body)
}
