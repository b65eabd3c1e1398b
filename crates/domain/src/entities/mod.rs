//! Domain entities - Core business objects with identity

mod actor;
mod character;
mod item;

pub use actor::{Actor, ActorType};
pub use character::{
    Capacity, CharacterAttributes, CharacterData, DieScore, Resource, Score, StatIncreases,
    MIN_DIE,
};
pub use item::{Enchantment, Item, ItemAttribute, ItemType};
