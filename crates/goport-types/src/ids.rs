//! Stable names: lock files, pinned identities, and known-bad manifest records.

// Lock files, in probe priority order.
pub const FILE_GO_SUM: &str = "go.sum";
pub const FILE_GLIDE_LOCK: &str = "glide.lock";
pub const FILE_GOPKG_LOCK: &str = "Gopkg.lock";
pub const FILE_GLOCKFILE: &str = "GLOCKFILE";

// Pinned identity: the protobuf module predates its vanity tag pointing at the mirror.
pub const PROTOBUF_COORDINATE: &str = "google.golang.org/protobuf";
pub const PROTOBUF_AUTHOR: &str = "protocolbuffers";
pub const PROTOBUF_PROJECT: &str = "protobuf-go";

// golang.org/x/... packages are fetched from their GitHub mirror.
pub const GOLANG_ORG: &str = "golang.org";
pub const GOLANG_MIRROR_AUTHOR: &str = "golang";

pub const GOPKG_IN: &str = "gopkg.in";

/// Hash of a historical go.sum record that never matched any published archive.
/// Lines carrying it are dropped before normalization.
pub const BOGUS_GO_SUM_HASH: &str = "h1:Xa0DcYlRDz3CQyIm5VMUsM1f1ZCnIx7I6OqCaxsDYJM=";

/// Body length of the placeholder GitHub answers with for some missing archives.
pub const PLACEHOLDER_ARCHIVE_LEN: u64 = 14;

pub const DEFAULT_USER_AGENT: &str = concat!("goport/", env!("CARGO_PKG_VERSION"));
