//! Actor document loading and preparation.
//!
//! Mirrors the host lifecycle: read the stored actor, recompute derived
//! data, then build the roll data view from the prepared actor.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use serde_json::{Map, Value};

use ryuutama_domain::{Actor, ItemId, ProgressionTables, RyuutamaSystem, SystemSettings};

/// A prepared actor together with its roll data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedSheet {
    pub actor: Actor,
    pub roll_data: Map<String, Value>,
}

pub fn load_actor(path: &Path) -> anyhow::Result<Actor> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read actor document {}", path.display()))?;
    let actor: Actor = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid actor document {}", path.display()))?;
    tracing::info!(
        actor_id = %actor.id,
        name = %actor.name,
        actor_type = %actor.actor_type,
        items = actor.items.len(),
        "Loaded actor"
    );
    Ok(actor)
}

pub fn load_tables(path: &Path) -> anyhow::Result<ProgressionTables> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read progression tables {}", path.display()))?;
    let tables = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid progression tables {}", path.display()))?;
    tracing::info!(path = %path.display(), "Loaded custom progression tables");
    Ok(tables)
}

/// Prepare `actor` and project its roll data.
pub fn prepare_sheet(
    system: &RyuutamaSystem,
    settings: &SystemSettings,
    mut actor: Actor,
) -> anyhow::Result<PreparedSheet> {
    system.prepare_data(&mut actor);
    log_sheet_state(&actor);
    let roll_data = system
        .roll_data(&actor, settings)
        .with_context(|| format!("Failed to build roll data for actor {}", actor.id))?;
    Ok(PreparedSheet { actor, roll_data })
}

/// Ids listed in a container's or animal's holding list that the actor
/// does not own.
pub fn unowned_held_items(actor: &Actor) -> Vec<ItemId> {
    actor
        .items
        .iter()
        .filter(|item| item.item_type.holds_items())
        .flat_map(|holder| holder.holding.iter().copied())
        .filter(|id| actor.item(*id).is_err())
        .collect()
}

fn log_sheet_state(actor: &Actor) {
    let capacity = actor.data.attributes.capacity;
    if capacity.is_overloaded() {
        tracing::warn!(
            actor_id = %actor.id,
            carried = capacity.value,
            max = capacity.max,
            "Actor is carrying more than their capacity"
        );
    }
    for (effect, magnitude) in actor.data.effects.active() {
        tracing::info!(actor_id = %actor.id, effect = %effect, magnitude, "Active status effect");
    }
    for item_id in unowned_held_items(actor) {
        tracing::warn!(actor_id = %actor.id, item_id = %item_id, "Held item is not owned by actor");
    }
}
