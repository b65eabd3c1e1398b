//! Character data - the attribute block of a Ryuutama character sheet
//!
//! Fields fall in two groups. Inputs are edited by the player (experience,
//! die sizes, stat-increase allocations, current HP/MP/condition). Derived
//! fields (level, maxima, capacity, travel modifiers) are overwritten every
//! time the sheet is prepared and are never authoritative.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Immunities, StatusEffects, TravelModifiers};

/// Smallest die an ability can use
pub const MIN_DIE: i32 = 4;

/// A single numeric attribute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    #[serde(default)]
    pub value: i32,
}

impl Score {
    pub fn new(value: i32) -> Self {
        Self { value }
    }
}

/// An ability expressed as a die size (4, 6, 8, 10 or 12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieScore {
    #[serde(default = "min_die")]
    pub value: i32,
    /// Counts as one die size larger for carrying capacity
    #[serde(default)]
    pub bonus: bool,
}

fn min_die() -> i32 {
    MIN_DIE
}

impl DieScore {
    pub fn new(value: i32) -> Self {
        Self { value, bonus: false }
    }
}

impl Default for DieScore {
    fn default() -> Self {
        Self::new(MIN_DIE)
    }
}

/// A current/maximum pair (HP, MP, condition)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub value: i32,
    #[serde(default)]
    pub max: i32,
}

impl Resource {
    pub fn new(value: i32, max: i32) -> Self {
        Self { value, max }
    }

    /// Pull `value` into `[0, max]`.
    ///
    /// A negative `max` wins over the lower bound, so the result is `max`
    /// rather than a panic.
    pub fn clamp_value(&mut self) {
        self.value = self.value.max(0).min(self.max);
    }
}

/// Carrying capacity (derived)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    /// Weight of carried, unequipped items
    #[serde(default)]
    pub value: i32,
    #[serde(default)]
    pub max: i32,
    /// Weight of equipped items
    #[serde(default)]
    pub equipped: i32,
}

impl Capacity {
    pub fn is_overloaded(&self) -> bool {
        self.value > self.max
    }
}

/// Level-up HP/MP increases the player has allocated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatIncreases {
    #[serde(default)]
    pub hp: i32,
    #[serde(default)]
    pub mp: i32,
    /// Total increases available at the current level (derived)
    #[serde(default)]
    pub earned: i32,
}

impl StatIncreases {
    pub fn allocated(&self) -> i32 {
        self.hp.saturating_add(self.mp)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterAttributes {
    #[serde(default)]
    pub exp: Score,
    #[serde(default)]
    pub level: Score,
    #[serde(rename = "str", default)]
    pub strength: DieScore,
    #[serde(rename = "dex", default)]
    pub dexterity: DieScore,
    #[serde(rename = "int", default)]
    pub intelligence: DieScore,
    #[serde(rename = "spi", default)]
    pub spirit: DieScore,
    #[serde(default)]
    pub condition: Resource,
    #[serde(default)]
    pub capacity: Capacity,
    #[serde(default)]
    pub stat_increases: StatIncreases,
}

/// Full data block of a character actor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterData {
    #[serde(default)]
    pub attributes: CharacterAttributes,
    #[serde(default)]
    pub hp: Resource,
    #[serde(default)]
    pub mp: Resource,
    /// Travel check modifiers per terrain/weather (derived)
    #[serde(default)]
    pub traveling: TravelModifiers,
    #[serde(default)]
    pub effects: StatusEffects,
    #[serde(default)]
    pub immunity: Immunities,
}

impl CharacterData {
    pub fn with_experience(mut self, exp: i32) -> Self {
        self.attributes.exp = Score::new(exp);
        self
    }

    pub fn with_strength(mut self, die: i32) -> Self {
        self.attributes.strength.value = die;
        self
    }

    pub fn with_spirit(mut self, die: i32) -> Self {
        self.attributes.spirit.value = die;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_value_bounds() {
        let mut over = Resource::new(30, 20);
        over.clamp_value();
        assert_eq!(over.value, 20);

        let mut under = Resource::new(-4, 20);
        under.clamp_value();
        assert_eq!(under.value, 0);

        let mut inside = Resource::new(7, 20);
        inside.clamp_value();
        assert_eq!(inside.value, 7);
    }

    #[test]
    fn clamp_value_with_negative_max_settles_on_max() {
        let mut resource = Resource::new(5, -2);
        resource.clamp_value();
        assert_eq!(resource.value, -2);
    }

    #[test]
    fn dice_default_to_smallest() {
        let attributes = CharacterAttributes::default();
        assert_eq!(attributes.strength.value, MIN_DIE);
        assert_eq!(attributes.spirit.value, MIN_DIE);
    }

    #[test]
    fn overload_is_strictly_greater() {
        let capacity = Capacity { value: 8, max: 8, equipped: 0 };
        assert!(!capacity.is_overloaded());
        let capacity = Capacity { value: 9, ..capacity };
        assert!(capacity.is_overloaded());
    }

    #[test]
    fn sheet_keys_deserialize() {
        let json = serde_json::json!({
            "attributes": {
                "exp": {"value": 650},
                "str": {"value": 8, "bonus": true},
                "spi": {"value": 6},
                "condition": {"value": 9, "max": 20},
                "statIncreases": {"hp": 2, "mp": 1}
            },
            "hp": {"value": 10},
            "effects": {"poison": 3},
            "immunity": {"poison": true}
        });
        let data: CharacterData = serde_json::from_value(json).unwrap();
        assert_eq!(data.attributes.exp.value, 650);
        assert!(data.attributes.strength.bonus);
        assert_eq!(data.attributes.spirit.value, 6);
        assert_eq!(data.attributes.dexterity.value, MIN_DIE);
        assert_eq!(data.attributes.stat_increases.allocated(), 3);
        assert_eq!(data.hp.value, 10);
    }

    #[test]
    fn serializes_with_sheet_keys() {
        let value = serde_json::to_value(CharacterData::default()).unwrap();
        let attributes = &value["attributes"];
        assert!(attributes.get("str").is_some());
        assert!(attributes.get("statIncreases").is_some());
        assert!(attributes.get("strength").is_none());
    }

    #[test]
    fn allocation_total_saturates() {
        let increases = StatIncreases { hp: i32::MAX, mp: 5, earned: 0 };
        assert_eq!(increases.allocated(), i32::MAX);
    }

    #[test]
    fn unrecognised_sheet_keys_are_skipped() {
        let json = serde_json::json!({
            "effects": {"fear": 1, "poison": 2},
            "immunity": {"fear": true},
            "traveling": {"lavaField": 3}
        });
        let data: CharacterData = serde_json::from_value(json).unwrap();
        assert_eq!(data.effects.get(crate::value_objects::StatusEffect::Poison), 2);
        assert_eq!(data.traveling.iter().count(), 0);
    }
}
