//! System settings value object
//!
//! The host platform keeps these as per-world settings. They are handed to
//! the domain explicitly rather than read from ambient state.

use serde::{Deserialize, Serialize};

/// Settings that influence how character data is projected for callers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    /// Promote `attributes.<key>.value` to `<key>` in roll data so formulas
    /// can write `@str` instead of `@attributes.str.value`.
    #[serde(default = "default_macro_shorthand")]
    pub macro_shorthand: bool,
}

fn default_macro_shorthand() -> bool {
    true
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            macro_shorthand: default_macro_shorthand(),
        }
    }
}

impl SystemSettings {
    pub fn with_macro_shorthand(mut self, enabled: bool) -> Self {
        self.macro_shorthand = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_is_on_by_default() {
        assert!(SystemSettings::default().macro_shorthand);
    }

    #[test]
    fn missing_field_uses_default() {
        let settings: SystemSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, SystemSettings::default());
    }

    #[test]
    fn explicit_field_is_respected() {
        let settings: SystemSettings =
            serde_json::from_str(r#"{"macroShorthand": false}"#).unwrap();
        assert!(!settings.macro_shorthand);
        assert!(settings.with_macro_shorthand(true).macro_shorthand);
    }
}
