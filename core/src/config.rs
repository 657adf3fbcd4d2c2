use std::fs;
use std::path::Path;

use crate::llm::LlmBridgeConfig;
use crate::{PlatformError, Result};

/// Environment variable naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "AGENT_PLATFORM_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "agent_platform.toml";

/// Top-level configuration, constructed once at startup and handed to the orchestrator
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlatformConfig {
    pub llm: LlmBridgeConfig,
}

impl PlatformConfig {
    /// Load configuration (path via AGENT_PLATFORM_CONFIG or ./agent_platform.toml),
    /// overlaying file values onto env-driven defaults. A missing or unreadable
    /// file falls back to the defaults.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        let p = Path::new(&path);
        if !p.exists() {
            tracing::info!(target: "config", path = %path, "No TOML config found; using defaults/env");
            return Self::default();
        }
        match Self::load_from(p) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(target: "config", path = %path, error = %e, "Failed to load TOML; using defaults");
                Self::default()
            }
        }
    }

    /// Load from an explicit path; unlike `load`, errors are returned.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let s = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let t: PlatformToml =
            toml::from_str(s).map_err(|e| PlatformError::ConfigError(e.to_string()))?;
        t.overlay(Self::default())
    }
}

// =========================
// TOML overlay definitions
// =========================

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct PlatformToml {
    pub llm: Option<LlmToml>,
}

impl PlatformToml {
    fn overlay(self, mut base: PlatformConfig) -> Result<PlatformConfig> {
        if let Some(l) = self.llm {
            l.apply(&mut base.llm)?;
        }
        Ok(base)
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct LlmToml {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub request_timeout_ms: Option<u64>,
}

impl LlmToml {
    fn apply(self, l: &mut LlmBridgeConfig) -> Result<()> {
        if let Some(v) = self.base_url.filter(|s| !s.is_empty()) {
            l.base_url = v;
        }
        if let Some(v) = self.model.filter(|s| !s.is_empty()) {
            l.model = v;
        }
        if let Some(v) = self.request_timeout_ms {
            if v == 0 {
                return Err(PlatformError::ConfigError(
                    "llm.request_timeout_ms must be greater than zero".into(),
                ));
            }
            l.request_timeout_ms = v;
        }
        Ok(())
    }
}
