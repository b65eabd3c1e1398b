//! Actor entity - a character or NPC together with the items it owns

use serde::{Deserialize, Serialize};

use super::{CharacterData, Item};
use crate::error::DomainError;
use crate::value_objects::ActorName;
use crate::{ActorId, ItemId};

/// Kind of actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorType {
    Character,
    Npc,
    /// Unknown type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ActorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Character => write!(f, "character"),
            Self::Npc => write!(f, "npc"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for ActorType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "character" => Ok(Self::Character),
            "npc" => Ok(Self::Npc),
            _ => Err(DomainError::parse(format!("Unknown actor type: {}", s))),
        }
    }
}

/// An actor and its exclusively owned items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: ActorName,
    #[serde(rename = "type")]
    pub actor_type: ActorType,
    #[serde(default)]
    pub data: CharacterData,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Actor {
    pub fn new(name: ActorName, actor_type: ActorType) -> Self {
        Self {
            id: ActorId::new(),
            name,
            actor_type,
            data: CharacterData::default(),
            items: Vec::new(),
        }
    }

    pub fn character(name: ActorName, data: CharacterData) -> Self {
        Self {
            data,
            ..Self::new(name, ActorType::Character)
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Look up an owned item.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` when the actor does not own `id`.
    pub fn item(&self, id: ItemId) -> Result<&Item, DomainError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| DomainError::not_found("Item", id.to_string()))
    }
}
