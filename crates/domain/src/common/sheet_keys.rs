//! Lenient deserialization for maps keyed by a fixed set of sheet names.
//!
//! Stored sheets carry keys this crate does not model (homebrew effects,
//! fields added by other modules). Those entries are skipped instead of
//! rejecting the whole document.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};

/// Deserialize a JSON object into a map keyed by `K`, dropping entries whose
/// key does not parse as `K`. Values of recognised keys must parse as `V`.
pub fn deserialize_known_keys<'de, D, K, V>(deserializer: D) -> Result<BTreeMap<K, V>, D::Error>
where
    D: Deserializer<'de>,
    K: FromStr + Ord,
    V: DeserializeOwned,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    let mut known = BTreeMap::new();
    for (key, value) in raw {
        match key.parse::<K>() {
            Ok(parsed) => {
                let value = serde_json::from_value(value)
                    .map_err(|e| D::Error::custom(format!("invalid value for {}: {}", key, e)))?;
                known.insert(parsed, value);
            }
            Err(_) => {
                tracing::debug!(key = %key, "Skipping unrecognised sheet key");
            }
        }
    }
    Ok(known)
}
