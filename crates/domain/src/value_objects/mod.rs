//! Value objects - Immutable objects defined by their attributes

mod names;
mod settings;
mod status_effect;
mod travel;

pub use names::{ActorName, ItemName};
pub use settings::SystemSettings;
pub use status_effect::{Immunities, StatusEffect, StatusEffects};
pub use travel::{TravelCondition, TravelFlags, TravelModifiers};
