//! Travel conditions and the per-condition modifiers derived from gear.
//!
//! Ryuutama travel checks are made against a terrain and a weather type.
//! Traveling gear grants a flat bonus against the conditions it is flagged
//! for; the character sheet keeps one modifier per condition.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::common::deserialize_known_keys;
use crate::error::DomainError;

/// A terrain or weather type a travel check can be made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TravelCondition {
    // Terrain
    Grassland,
    Wasteland,
    Woods,
    Highlands,
    Rocky,
    DeepForest,
    Swamp,
    Mountain,
    Desert,
    Jungle,
    Alpine,
    // Weather
    Rain,
    StrongWind,
    Fog,
    Hot,
    Cold,
    HardRain,
    Snow,
    DeepFog,
    Dark,
    Hurricane,
    Blizzard,
}

impl TravelCondition {
    /// Every condition the sheet tracks, terrain first.
    pub const ALL: [TravelCondition; 22] = [
        Self::Grassland,
        Self::Wasteland,
        Self::Woods,
        Self::Highlands,
        Self::Rocky,
        Self::DeepForest,
        Self::Swamp,
        Self::Mountain,
        Self::Desert,
        Self::Jungle,
        Self::Alpine,
        Self::Rain,
        Self::StrongWind,
        Self::Fog,
        Self::Hot,
        Self::Cold,
        Self::HardRain,
        Self::Snow,
        Self::DeepFog,
        Self::Dark,
        Self::Hurricane,
        Self::Blizzard,
    ];

    /// Sheet key for this condition (matches the serialized form).
    pub fn key(&self) -> &'static str {
        match self {
            Self::Grassland => "grassland",
            Self::Wasteland => "wasteland",
            Self::Woods => "woods",
            Self::Highlands => "highlands",
            Self::Rocky => "rocky",
            Self::DeepForest => "deepForest",
            Self::Swamp => "swamp",
            Self::Mountain => "mountain",
            Self::Desert => "desert",
            Self::Jungle => "jungle",
            Self::Alpine => "alpine",
            Self::Rain => "rain",
            Self::StrongWind => "strongWind",
            Self::Fog => "fog",
            Self::Hot => "hot",
            Self::Cold => "cold",
            Self::HardRain => "hardRain",
            Self::Snow => "snow",
            Self::DeepFog => "deepFog",
            Self::Dark => "dark",
            Self::Hurricane => "hurricane",
            Self::Blizzard => "blizzard",
        }
    }
}

impl fmt::Display for TravelCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TravelCondition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|condition| condition.key() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown travel condition: {}", s)))
    }
}

/// Per-condition travel check modifiers on a character sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TravelModifiers(BTreeMap<TravelCondition, i32>);

impl<'de> Deserialize<'de> for TravelModifiers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_known_keys(deserializer).map(Self)
    }
}

impl TravelModifiers {
    /// Modifier against `condition` (0 when never set).
    pub fn get(&self, condition: TravelCondition) -> i32 {
        self.0.get(&condition).copied().unwrap_or(0)
    }

    pub fn set(&mut self, condition: TravelCondition, value: i32) {
        self.0.insert(condition, value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (TravelCondition, i32)> + '_ {
        self.0.iter().map(|(condition, value)| (*condition, *value))
    }
}

/// Which travel conditions a piece of gear helps with.
///
/// Flattened into the item, so deserialization sees every item field the
/// item itself does not claim; only condition keys are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TravelFlags(BTreeMap<TravelCondition, bool>);

impl<'de> Deserialize<'de> for TravelFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_known_keys(deserializer).map(Self)
    }
}

impl TravelFlags {
    pub fn grants(&self, condition: TravelCondition) -> bool {
        self.0.get(&condition).copied().unwrap_or(false)
    }

    pub fn set(&mut self, condition: TravelCondition, enabled: bool) {
        self.0.insert(condition, enabled);
    }
}

impl FromIterator<TravelCondition> for TravelFlags {
    fn from_iter<I: IntoIterator<Item = TravelCondition>>(iter: I) -> Self {
        Self(iter.into_iter().map(|condition| (condition, true)).collect())
    }
}
