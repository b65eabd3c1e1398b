//! Item entity - Gear, containers and animals owned by an actor
//!
//! Containment is modeled on the holder: a container or pack animal lists
//! the items it carries in `holding`, stored as `{"id": ...}` entries. Items
//! in a holding list do not count toward the owner's carried weight.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::error::DomainError;
use crate::value_objects::{ItemName, TravelCondition, TravelFlags};
use crate::ItemId;

/// Item category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Item,
    Weapon,
    Armor,
    Shield,
    Traveling,
    Container,
    Animal,
    Herb,
    /// Unknown type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl ItemType {
    /// Containers and pack animals carry other items in their holding list.
    pub fn holds_items(&self) -> bool {
        matches!(self, Self::Container | Self::Animal)
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Item => write!(f, "item"),
            Self::Weapon => write!(f, "weapon"),
            Self::Armor => write!(f, "armor"),
            Self::Shield => write!(f, "shield"),
            Self::Traveling => write!(f, "traveling"),
            Self::Container => write!(f, "container"),
            Self::Animal => write!(f, "animal"),
            Self::Herb => write!(f, "herb"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for ItemType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "item" => Ok(Self::Item),
            "weapon" => Ok(Self::Weapon),
            "armor" => Ok(Self::Armor),
            "shield" => Ok(Self::Shield),
            "traveling" => Ok(Self::Traveling),
            "container" => Ok(Self::Container),
            "animal" => Ok(Self::Animal),
            "herb" => Ok(Self::Herb),
            _ => Err(DomainError::parse(format!("Unknown item type: {}", s))),
        }
    }
}

/// A modifier attached to an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enchantment {
    #[serde(default)]
    pub name: String,
    /// Added to max HP while the item is equipped
    #[serde(default)]
    pub hp_mod: i32,
    /// Added to max MP while the item is equipped
    #[serde(default)]
    pub mp_mod: i32,
    /// The enchanted item weighs nothing when carried
    #[serde(default)]
    pub weightless: bool,
}

impl Enchantment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_hp_mod(mut self, hp_mod: i32) -> Self {
        self.hp_mod = hp_mod;
        self
    }

    pub fn with_mp_mod(mut self, mp_mod: i32) -> Self {
        self.mp_mod = mp_mod;
        self
    }

    pub fn weightless(mut self) -> Self {
        self.weightless = true;
        self
    }
}

/// Free-form item attribute exposed to roll formulas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAttribute {
    pub value: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// An object owned by an actor
///
/// Plain data: any combination of field values is valid. Derived character
/// values read these fields, they never write them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub equipped: bool,
    /// Weight in size units; items without a size never count toward capacity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(default)]
    pub enchantments: Vec<Enchantment>,
    /// Ids of carried items (containers and animals only)
    #[serde(
        default,
        serialize_with = "serialize_holding",
        deserialize_with = "deserialize_holding"
    )]
    pub holding: Vec<ItemId>,
    /// Travel conditions this item grants `item_bonus` against when equipped.
    /// Stored as top-level flags on the item (`"mountain": true`).
    #[serde(flatten)]
    pub travel: TravelFlags,
    #[serde(default)]
    pub item_bonus: i32,
    #[serde(default)]
    pub attributes: BTreeMap<String, ItemAttribute>,
}

impl Item {
    pub fn new(name: ItemName, item_type: ItemType) -> Self {
        Self {
            id: ItemId::new(),
            name,
            item_type,
            equipped: false,
            size: None,
            enchantments: Vec::new(),
            holding: Vec::new(),
            travel: TravelFlags::default(),
            item_bonus: 0,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_equipped(mut self, equipped: bool) -> Self {
        self.equipped = equipped;
        self
    }

    pub fn with_size(mut self, size: i32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_enchantment(mut self, enchantment: Enchantment) -> Self {
        self.enchantments.push(enchantment);
        self
    }

    pub fn with_travel_bonus(
        mut self,
        bonus: i32,
        conditions: impl IntoIterator<Item = TravelCondition>,
    ) -> Self {
        self.item_bonus = bonus;
        for condition in conditions {
            self.travel.set(condition, true);
        }
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes
            .insert(key.into(), ItemAttribute { value, label: None });
        self
    }

    /// Put `item` into this item's holding list.
    pub fn hold(&mut self, item: ItemId) {
        if !self.holding.contains(&item) {
            self.holding.push(item);
        }
    }

    pub fn is_weightless(&self) -> bool {
        self.enchantments.iter().any(|e| e.weightless)
    }

    /// Whether this item is a container or animal currently carrying `item`.
    pub fn is_holding(&self, item: ItemId) -> bool {
        self.item_type.holds_items() && self.holding.contains(&item)
    }
}

/// Holding list entry as stored on the sheet
#[derive(Serialize, Deserialize)]
struct HeldItem {
    id: ItemId,
}

/// Older sheets store bare ids instead of `{"id": ...}` entries.
#[derive(Deserialize)]
#[serde(untagged)]
enum HoldingEntry {
    Entry(HeldItem),
    Id(ItemId),
}

fn serialize_holding<S>(holding: &[ItemId], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(holding.iter().map(|id| HeldItem { id: *id }))
}

fn deserialize_holding<'de, D>(deserializer: D) -> Result<Vec<ItemId>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<HoldingEntry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            HoldingEntry::Entry(held) => held.id,
            HoldingEntry::Id(id) => id,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ItemName {
        ItemName::new(s).unwrap()
    }

    #[test]
    fn only_containers_and_animals_hold_items() {
        assert!(ItemType::Container.holds_items());
        assert!(ItemType::Animal.holds_items());
        assert!(!ItemType::Weapon.holds_items());
        assert!(!ItemType::Unknown.holds_items());
    }

    #[test]
    fn item_type_parse_and_display_agree() {
        let tags = [
            "item", "weapon", "armor", "shield", "traveling", "container", "animal", "herb",
        ];
        for tag in tags {
            let parsed: ItemType = tag.parse().unwrap();
            assert_eq!(parsed.to_string(), tag);
        }
        assert!("spaceship".parse::<ItemType>().is_err());
    }

    #[test]
    fn unknown_type_deserializes_as_unknown() {
        let parsed: ItemType = serde_json::from_str("\"spell\"").unwrap();
        assert_eq!(parsed, ItemType::Unknown);
    }

    #[test]
    fn hold_ignores_duplicates() {
        let herb = Item::new(name("Herb"), ItemType::Herb);
        let mut bag = Item::new(name("Bag"), ItemType::Container);
        bag.hold(herb.id);
        bag.hold(herb.id);
        assert_eq!(bag.holding.len(), 1);
        assert!(bag.is_holding(herb.id));
    }

    #[test]
    fn holding_list_on_plain_item_does_not_count() {
        let herb = Item::new(name("Herb"), ItemType::Herb);
        let mut sword = Item::new(name("Sword"), ItemType::Weapon);
        sword.holding.push(herb.id);
        assert!(!sword.is_holding(herb.id));
    }

    #[test]
    fn weightless_needs_one_enchantment() {
        let plain = Item::new(name("Pot"), ItemType::Item)
            .with_enchantment(Enchantment::new("Sturdy").with_hp_mod(1));
        assert!(!plain.is_weightless());

        let light = plain.with_enchantment(Enchantment::new("Feather").weightless());
        assert!(light.is_weightless());
    }

    #[test]
    fn deserializes_sheet_shaped_json() {
        let json = serde_json::json!({
            "id": "3f2c1f5e-8d43-4a8b-9a59-2f1c7e6d0b11",
            "name": "Walking Stick",
            "type": "traveling",
            "equipped": true,
            "size": 1,
            "enchantments": [{"name": "Sturdy", "hpMod": 2}],
            "mountain": true,
            "rain": false,
            "itemBonus": 1,
            "description": "Gnarled oak"
        });
        let item: Item = serde_json::from_value(json).unwrap();
        assert_eq!(item.item_type, ItemType::Traveling);
        assert_eq!(item.size, Some(1));
        assert_eq!(item.enchantments[0].hp_mod, 2);
        assert_eq!(item.enchantments[0].mp_mod, 0);
        assert!(item.travel.grants(TravelCondition::Mountain));
        assert!(!item.travel.grants(TravelCondition::Rain));
        assert_eq!(item.item_bonus, 1);
        assert!(item.holding.is_empty());
    }

    #[test]
    fn holding_accepts_entries_and_bare_ids() {
        let json = serde_json::json!({
            "id": "5d0c6a1e-2b3f-4c5d-8e9f-a0b1c2d3e4f5",
            "name": "Basket",
            "type": "container",
            "holding": [
                {"id": "3f2c1f5e-8d43-4a8b-9a59-2f1c7e6d0b11"},
                "0b9c8d7e-6f5a-4b3c-2d1e-0f9a8b7c6d5e"
            ]
        });
        let basket: Item = serde_json::from_value(json).unwrap();
        assert_eq!(basket.holding.len(), 2);
        let first: ItemId = "3f2c1f5e-8d43-4a8b-9a59-2f1c7e6d0b11".parse().unwrap();
        assert!(basket.is_holding(first));
    }

    #[test]
    fn serializes_in_sheet_layout() {
        let herb = Item::new(name("Herb"), ItemType::Herb);
        let mut basket = Item::new(name("Basket"), ItemType::Container)
            .with_travel_bonus(1, [TravelCondition::Woods]);
        basket.hold(herb.id);

        let json = serde_json::to_value(&basket).unwrap();
        assert_eq!(json["woods"], serde_json::json!(true));
        assert!(json.get("travel").is_none());
        assert_eq!(json["holding"][0]["id"], serde_json::json!(herb.id.to_string()));

        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back, basket);
    }
}
