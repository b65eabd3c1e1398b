//! Derived character values.
//!
//! Recomputed from stored inputs and owned items every time an actor is
//! prepared. The passes run in a fixed order because later ones read the
//! results of earlier ones (capacity needs the level, clamping needs the
//! maxima).

use super::RyuutamaSystem;
use crate::entities::{Actor, ActorType, CharacterData, Enchantment, Item, ItemType};
use crate::game_systems::traits::CalculationEngine;
use crate::value_objects::{StatusEffect, TravelCondition};

impl RyuutamaSystem {
    /// Prepare an actor's derived data. Only characters have any.
    pub fn prepare_data(&self, actor: &mut Actor) {
        match actor.actor_type {
            ActorType::Character => self.prepare_character_data(&mut actor.data, &actor.items),
            other => {
                tracing::debug!(
                    actor_id = %actor.id,
                    actor_type = %other,
                    "No derived data for actor type"
                );
            }
        }
    }

    /// Recompute every derived field of `data` from its inputs and `items`.
    ///
    /// Running this twice on the same input gives the same result.
    pub fn prepare_character_data(&self, data: &mut CharacterData, items: &[Item]) {
        let attributes = &mut data.attributes;

        let level = self.level_from_experience(attributes.exp.value);
        attributes.level.value = level;

        let increases = &mut attributes.stat_increases;
        increases.earned = self.earned_stat_increases(level);
        if increases.allocated() > increases.earned {
            tracing::debug!(
                hp = increases.hp,
                mp = increases.mp,
                earned = increases.earned,
                "Allocated stat increases exceed earned total, resetting both"
            );
            increases.hp = 0;
            increases.mp = 0;
        }
        increases.hp = increases.hp.max(0);
        increases.mp = increases.mp.max(0);
        let (hp_increase, mp_increase) = (increases.hp, increases.mp);

        let hp_mods = equipped_enchantment_total(items, |e| e.hp_mod);
        let mp_mods = equipped_enchantment_total(items, |e| e.mp_mod);
        data.hp.max = self.max_points(attributes.strength.value, hp_mods, hp_increase);
        data.mp.max = self.max_points(attributes.spirit.value, mp_mods, mp_increase);

        data.hp.clamp_value();
        data.mp.clamp_value();
        attributes.condition.clamp_value();

        let strength =
            self.capacity_strength(attributes.strength.value, attributes.strength.bonus);
        attributes.capacity.max = self.carrying_capacity(strength, level);
        attributes.capacity.value = carried_weight(items);
        attributes.capacity.equipped = equipped_weight(items);

        for condition in TravelCondition::ALL {
            data.traveling.set(condition, travel_bonus(items, condition));
        }

        for effect in StatusEffect::ALL {
            if data.immunity.is_immune(effect) {
                data.effects.set(effect, 0);
            }
        }

        tracing::debug!(
            level,
            hp_max = data.hp.max,
            mp_max = data.mp.max,
            capacity = attributes.capacity.value,
            capacity_max = attributes.capacity.max,
            "Prepared character data"
        );
    }
}

fn equipped(items: &[Item]) -> impl Iterator<Item = &Item> {
    items.iter().filter(|item| item.equipped)
}

/// Sum of one enchantment modifier over every equipped item.
fn equipped_enchantment_total(items: &[Item], modifier: impl Fn(&Enchantment) -> i32) -> i32 {
    equipped(items)
        .flat_map(|item| item.enchantments.iter())
        .map(modifier)
        .filter(|value| *value != 0)
        .fold(0, i32::saturating_add)
}

/// Weight carried outside of equipment, containers and pack animals.
fn carried_weight(items: &[Item]) -> i32 {
    let holders: Vec<&Item> = items
        .iter()
        .filter(|item| item.item_type.holds_items())
        .collect();

    items
        .iter()
        .filter(|item| !item.equipped && item.item_type != ItemType::Animal)
        .filter(|item| !item.is_weightless())
        .filter(|item| !holders.iter().any(|holder| holder.is_holding(item.id)))
        .filter_map(|item| item.size)
        .fold(0, i32::saturating_add)
}

fn equipped_weight(items: &[Item]) -> i32 {
    equipped(items)
        .filter_map(|item| item.size)
        .fold(0, i32::saturating_add)
}

fn travel_bonus(items: &[Item], condition: TravelCondition) -> i32 {
    equipped(items)
        .filter(|item| item.travel.grants(condition))
        .map(|item| item.item_bonus)
        .fold(0, i32::saturating_add)
}
