//! Status effects and immunities.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::common::deserialize_known_keys;
use crate::error::DomainError;

/// A Ryuutama status effect. Its magnitude is the effect's strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusEffect {
    Injury,
    Poison,
    Sickness,
    Exhaustion,
    Muddled,
    Shock,
}

impl StatusEffect {
    pub const ALL: [StatusEffect; 6] = [
        Self::Injury,
        Self::Poison,
        Self::Sickness,
        Self::Exhaustion,
        Self::Muddled,
        Self::Shock,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Injury => "injury",
            Self::Poison => "poison",
            Self::Sickness => "sickness",
            Self::Exhaustion => "exhaustion",
            Self::Muddled => "muddled",
            Self::Shock => "shock",
        }
    }
}

impl fmt::Display for StatusEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StatusEffect {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "injury" => Ok(Self::Injury),
            "poison" => Ok(Self::Poison),
            "sickness" => Ok(Self::Sickness),
            "exhaustion" => Ok(Self::Exhaustion),
            "muddled" => Ok(Self::Muddled),
            "shock" => Ok(Self::Shock),
            _ => Err(DomainError::parse(format!("Unknown status effect: {}", s))),
        }
    }
}

/// Current magnitude of each status effect on a character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatusEffects(BTreeMap<StatusEffect, i32>);

impl<'de> Deserialize<'de> for StatusEffects {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_known_keys(deserializer).map(Self)
    }
}

impl StatusEffects {
    pub fn get(&self, effect: StatusEffect) -> i32 {
        self.0.get(&effect).copied().unwrap_or(0)
    }

    pub fn set(&mut self, effect: StatusEffect, magnitude: i32) {
        self.0.insert(effect, magnitude);
    }

    /// Effects with a nonzero magnitude.
    pub fn active(&self) -> impl Iterator<Item = (StatusEffect, i32)> + '_ {
        self.0
            .iter()
            .filter(|(_, magnitude)| **magnitude != 0)
            .map(|(effect, magnitude)| (*effect, *magnitude))
    }
}

/// Status effects a character cannot suffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Immunities(BTreeMap<StatusEffect, bool>);

impl<'de> Deserialize<'de> for Immunities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_known_keys(deserializer).map(Self)
    }
}

impl Immunities {
    pub fn is_immune(&self, effect: StatusEffect) -> bool {
        self.0.get(&effect).copied().unwrap_or(false)
    }

    pub fn set(&mut self, effect: StatusEffect, immune: bool) {
        self.0.insert(effect, immune);
    }
}
