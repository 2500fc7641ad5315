//! Config key registry.
//!
//! Metadata for every known configuration key: dotted path, description,
//! and valid values. Used by `--show-config` and for mapping keys to
//! `PAIKEYS_*` environment variables.

/// Prefix of environment variables that override config keys
pub const ENV_PREFIX: &str = "PAIKEYS_";

/// Metadata for a single config key.
#[derive(Debug, Clone)]
pub struct ConfigKeyInfo {
    /// Dotted key path (e.g., `"scoring.tone_bonus"`).
    pub key: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Valid string values (empty if freeform).
    pub valid_values: &'static [&'static str],
}

impl ConfigKeyInfo {
    /// Environment variable that overrides this key, e.g. `PAIKEYS_SCORING__TONE_BONUS`
    pub fn env_var(&self) -> String {
        format!("{}{}", ENV_PREFIX, self.key.replace('.', "__").to_uppercase())
    }
}

/// All known config keys with their metadata.
pub fn known_keys() -> &'static [ConfigKeyInfo] {
    &KNOWN_KEYS
}

/// Look up a config key by its dotted path.
pub fn lookup_key(key: &str) -> Option<&'static ConfigKeyInfo> {
    KNOWN_KEYS.iter().find(|k| k.key == key)
}

static KNOWN_KEYS: [ConfigKeyInfo; 8] = [
    // ==================== Catalog ====================
    ConfigKeyInfo {
        key: "catalog.path",
        description: "TOML catalog file replacing the built-in catalog",
        valid_values: &[],
    },
    // ==================== Scoring ====================
    ConfigKeyInfo {
        key: "scoring.dominant_weight",
        description: "Weight of the axis selected by the request priority",
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "scoring.secondary_weight",
        description: "Weight of each non-selected axis",
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "scoring.tone_bonus",
        description: "Bonus for a strength tag matching the requested tone",
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "scoring.latency_scale_ms",
        description: "Latency at which the speed sub-score is 0.5",
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "scoring.cost_scale",
        description: "Relative cost at which the cost sub-score is 0.5",
        valid_values: &[],
    },
    // ==================== Output ====================
    ConfigKeyInfo {
        key: "output.format",
        description: "Output format",
        valid_values: &["text", "json"],
    },
    ConfigKeyInfo {
        key: "output.color",
        description: "Enable colored terminal output",
        valid_values: &["true", "false"],
    },
];
