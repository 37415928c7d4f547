use goport_types::{DependencyRecord, PortError};

/// One lock file format.
///
/// `parse` gets the raw file contents and returns the dependencies it pins. A parse failure
/// is reported as [`PortError::ManifestNotFound`]: an unreadable lock file is treated the
/// same as a missing one.
pub trait ManifestProbe {
    /// File name looked up in the repository (e.g. `go.sum`).
    fn file_name(&self) -> &'static str;

    fn parse(&self, raw: &[u8]) -> Result<Vec<DependencyRecord>, PortError>;
}
