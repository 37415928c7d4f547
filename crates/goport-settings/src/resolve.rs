use crate::model::GoportConfigV1;
use goport_types::ids::DEFAULT_USER_AGENT;

/// How much the tool reports on stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Debug,
}

impl Verbosity {
    /// Default `tracing` filter directive for this level.
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Debug => "debug",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub best_effort: Option<bool>,
    pub manifest_dir: Option<String>,
    pub verbosity: Option<Verbosity>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub best_effort: bool,
    pub manifest_dir: Option<String>,
    pub user_agent: String,
    pub verbosity: Verbosity,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            best_effort: true,
            manifest_dir: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            verbosity: Verbosity::Normal,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: GoportConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut effective = EffectiveConfig::default();

    if let Some(best_effort) = overrides.best_effort.or(cfg.best_effort) {
        effective.best_effort = best_effort;
    }

    effective.manifest_dir = overrides
        .manifest_dir
        .or(cfg.manifest_dir)
        .map(|d| d.trim_matches('/').to_string())
        .filter(|d| !d.is_empty());

    if let Some(user_agent) = cfg.user_agent {
        if user_agent.trim().is_empty() {
            anyhow::bail!("user_agent must not be empty");
        }
        effective.user_agent = user_agent;
    }

    // CLI flags win; the file's value is still validated.
    let file_verbosity = cfg.verbosity.as_deref().map(parse_verbosity).transpose()?;
    if let Some(verbosity) = overrides.verbosity.or(file_verbosity) {
        effective.verbosity = verbosity;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_verbosity(v: &str) -> anyhow::Result<Verbosity> {
    match v {
        "quiet" => Ok(Verbosity::Quiet),
        "normal" => Ok(Verbosity::Normal),
        "debug" => Ok(Verbosity::Debug),
        other => anyhow::bail!("unknown verbosity: {other} (expected quiet|normal|debug)"),
    }
}
