use goport_fetch::Fetcher;
use goport_types::ids::PLACEHOLDER_ARCHIVE_LEN;
use goport_types::{ChecksumRecord, PortError};
use ripemd::{Digest as _, Ripemd160};
use sha2::{Digest as _, Sha256};

/// Size and digests of `bytes`.
pub fn checksum_bytes(bytes: &[u8]) -> ChecksumRecord {
    ChecksumRecord {
        sha256: hex::encode(Sha256::digest(bytes)),
        rmd160: hex::encode(Ripemd160::digest(bytes)),
        size: bytes.len() as u64,
    }
}

/// Download `url` and checksum the body.
///
/// Anything but a 200 is an [`PortError::ArchiveFetch`] naming `coordinate` and `url`.
pub fn compute_checksum(
    fetcher: &dyn Fetcher,
    coordinate: &str,
    url: &str,
) -> Result<ChecksumRecord, PortError> {
    let fetch_error = |reason: String| PortError::ArchiveFetch {
        coordinate: coordinate.to_string(),
        url: url.to_string(),
        reason,
    };
    let response = fetcher.get(url).map_err(|e| fetch_error(format!("{e:#}")))?;
    if !response.is_ok() {
        return Err(fetch_error(format!("HTTP status {}", response.status)));
    }

    let record = checksum_bytes(&response.body);
    if record.size == PLACEHOLDER_ARCHIVE_LEN {
        tracing::warn!(
            coordinate,
            url,
            "archive is only {PLACEHOLDER_ARCHIVE_LEN} bytes; the server probably answered \
             with a placeholder instead of the archive"
        );
    }
    Ok(record)
}

/// Best-effort wrapper: checksum failures become the all-zero record and a warning.
pub fn checksum_or_unavailable(
    result: Result<ChecksumRecord, PortError>,
    coordinate: &str,
) -> ChecksumRecord {
    match result {
        Ok(record) => record,
        Err(err) => {
            tracing::warn!(coordinate, "{err}; using placeholder checksums");
            ChecksumRecord::unavailable()
        }
    }
}
