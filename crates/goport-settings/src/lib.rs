//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::GoportConfigV1;
pub use resolve::{EffectiveConfig, Overrides, ResolvedConfig, Verbosity};

/// Parse `goport.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<GoportConfigV1> {
    let cfg: GoportConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (defaults + file + CLI overrides).
pub fn resolve_config(cfg: GoportConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
