pub mod common;
pub mod entities;
pub mod error;
pub mod game_systems;
pub mod ids;
pub mod value_objects;

pub use entities::{
    Actor, ActorType, Capacity, CharacterAttributes, CharacterData, DieScore, Enchantment, Item,
    ItemAttribute, ItemType, Resource, Score, StatIncreases,
};

pub use error::DomainError;

// Re-export game system traits and types
pub use game_systems::{
    CalculationEngine, GameSystem, ProgressionTables, RyuutamaSystem, CHARACTER_EXP_LEVELS, DICE,
};

// Re-export ID types
pub use ids::{ActorId, ItemId};

pub use value_objects::{
    ActorName, Immunities, ItemName, StatusEffect, StatusEffects, SystemSettings,
    TravelCondition, TravelFlags, TravelModifiers,
};
