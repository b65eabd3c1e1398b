//! Engine configuration from environment variables.
//!
//! Supported environment variables:
//! - RYUUTAMA_MACRO_SHORTHAND: flatten attribute values in roll data (default: true)
//! - RYUUTAMA_ACTOR_PATH: actor document to prepare when no path argument is given
//! - RYUUTAMA_TABLES_PATH: JSON progression tables replacing the published ones
//!
//! Invalid values are logged and ignored.

use std::path::PathBuf;

use ryuutama_domain::SystemSettings;

pub const MACRO_SHORTHAND_VAR: &str = "RYUUTAMA_MACRO_SHORTHAND";
pub const ACTOR_PATH_VAR: &str = "RYUUTAMA_ACTOR_PATH";
pub const TABLES_PATH_VAR: &str = "RYUUTAMA_TABLES_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub settings: SystemSettings,
    pub actor_path: Option<PathBuf>,
    pub tables_path: Option<PathBuf>,
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup(MACRO_SHORTHAND_VAR) {
            match parse_flag(&val) {
                Some(enabled) => {
                    config.settings = config.settings.with_macro_shorthand(enabled);
                    tracing::info!(
                        enabled,
                        "Applied RYUUTAMA_MACRO_SHORTHAND environment variable"
                    );
                }
                None => {
                    tracing::warn!(
                        val = %val,
                        "RYUUTAMA_MACRO_SHORTHAND is not a valid boolean, ignoring"
                    );
                }
            }
        }

        config.actor_path = lookup(ACTOR_PATH_VAR).and_then(non_empty_path);
        config.tables_path = lookup(TABLES_PATH_VAR).and_then(non_empty_path);
        config
    }
}

fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn non_empty_path(val: String) -> Option<PathBuf> {
    let trimmed = val.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> EngineConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert!(config.settings.macro_shorthand);
        assert_eq!(config.actor_path, None);
        assert_eq!(config.tables_path, None);
    }

    #[test]
    fn shorthand_flag_accepts_common_spellings() {
        for (val, expected) in [("false", false), ("0", false), ("OFF", false), (" yes ", true)] {
            let config = config_from(&[(MACRO_SHORTHAND_VAR, val)]);
            assert_eq!(config.settings.macro_shorthand, expected, "value {:?}", val);
        }
    }

    #[test]
    fn invalid_shorthand_flag_keeps_default() {
        let config = config_from(&[(MACRO_SHORTHAND_VAR, "maybe")]);
        assert!(config.settings.macro_shorthand);
    }

    #[test]
    fn paths_are_trimmed_and_blank_is_unset() {
        let config = config_from(&[
            (ACTOR_PATH_VAR, " sheets/rilla.json "),
            (TABLES_PATH_VAR, "  "),
        ]);
        assert_eq!(config.actor_path, Some(PathBuf::from("sheets/rilla.json")));
        assert_eq!(config.tables_path, None);
    }
}
