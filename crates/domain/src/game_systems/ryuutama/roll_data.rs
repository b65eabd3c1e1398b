//! Roll data: the flattened view of an actor handed to formula evaluators.
//!
//! With macro shorthand on, `@attributes.str.value` can be written `@str`.
//! Items are reachable as `@items.<slug>`.

use serde::Serialize;
use serde_json::{Map, Value};

use super::RyuutamaSystem;
use crate::common::slugify;
use crate::entities::Actor;
use crate::error::DomainError;
use crate::value_objects::SystemSettings;

const ATTRIBUTES_KEY: &str = "attributes";
const ITEMS_KEY: &str = "items";
/// Item identity fields; roll data only carries the item's sheet data.
const ITEM_IDENTITY_KEYS: [&str; 3] = ["id", "name", "type"];

impl RyuutamaSystem {
    /// Project `actor` into roll data. The actor is not modified.
    ///
    /// Call after [`RyuutamaSystem::prepare_data`] so derived values are
    /// current.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Serialization` if the actor or one of its items
    /// does not serialize to a JSON object.
    pub fn roll_data(
        &self,
        actor: &Actor,
        settings: &SystemSettings,
    ) -> Result<Map<String, Value>, DomainError> {
        let mut data = to_object(&actor.data)?;
        if settings.macro_shorthand {
            promote_attribute_values(&mut data);
        }

        let mut items = Map::new();
        for item in &actor.items {
            let mut item_data = to_object(item)?;
            for key in ITEM_IDENTITY_KEYS {
                item_data.remove(key);
            }
            if settings.macro_shorthand {
                promote_attribute_values(&mut item_data);
            }
            // Later items win on slug collisions
            items.insert(slugify(item.name.as_str()), Value::Object(item_data));
        }
        data.insert(ITEMS_KEY.to_string(), Value::Object(items));

        Ok(data)
    }
}

fn to_object<T: Serialize>(value: &T) -> Result<Map<String, Value>, DomainError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(DomainError::serialization(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

/// Move each `attributes.<key>.value` up to `<key>` and drop `attributes`.
///
/// Existing top-level keys are never overwritten; attributes without a
/// `value` are dropped along with the container.
fn promote_attribute_values(data: &mut Map<String, Value>) {
    let Some(Value::Object(attributes)) = data.remove(ATTRIBUTES_KEY) else {
        return;
    };
    for (key, attribute) in attributes {
        if data.contains_key(&key) {
            continue;
        }
        if let Some(value) = attribute.get("value") {
            data.insert(key, value.clone());
        }
    }
}
