//! Ryuutama game system implementation.
//!
//! Ryuutama abilities are die sizes (d4 to d12). Key derived values:
//! - Level from experience thresholds
//! - HP = STR × 2 and MP = SPI × 2, plus equipment and level-up increases
//! - Carrying capacity = STR + 2 + level
//! - Travel check modifiers per terrain and weather from equipped gear
//!
//! Sheet numbers are unbounded player input, so every sum saturates.

mod derived;
mod roll_data;
mod tables;

pub use tables::{ProgressionTables, CHARACTER_EXP_LEVELS, DICE};

use super::traits::{CalculationEngine, GameSystem};

/// HP/MP gained per level past the first
const STAT_INCREASES_PER_LEVEL: i32 = 3;

/// Ryuutama game system.
#[derive(Debug, Clone, Default)]
pub struct RyuutamaSystem {
    tables: ProgressionTables,
}

impl RyuutamaSystem {
    /// Create a system using the published progression tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a system with tables supplied by the embedding application.
    pub fn with_tables(tables: ProgressionTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ProgressionTables {
        &self.tables
    }
}

impl GameSystem for RyuutamaSystem {
    fn system_id(&self) -> &str {
        "ryuutama"
    }

    fn display_name(&self) -> &str {
        "Ryuutama"
    }

    fn calculation_engine(&self) -> &dyn CalculationEngine {
        self
    }

    fn stat_names(&self) -> &[&str] {
        &["STR", "DEX", "INT", "SPI"]
    }
}

impl CalculationEngine for RyuutamaSystem {
    fn level_from_experience(&self, exp: i32) -> i32 {
        self.tables.level_for(exp)
    }

    fn earned_stat_increases(&self, level: i32) -> i32 {
        level
            .saturating_sub(1)
            .saturating_mul(STAT_INCREASES_PER_LEVEL)
    }

    fn max_points(&self, die: i32, modifiers: i32, allocated: i32) -> i32 {
        die.saturating_mul(2)
            .saturating_add(modifiers)
            .saturating_add(allocated)
    }

    fn capacity_strength(&self, die: i32, bonus: bool) -> i32 {
        if !bonus {
            return die;
        }
        match self.tables.step_up(die) {
            Some(stepped) => stepped,
            None => {
                tracing::debug!(die, "Strength die not in die-step table, bonus ignored");
                die
            }
        }
    }

    fn carrying_capacity(&self, strength: i32, level: i32) -> i32 {
        strength.saturating_add(2).saturating_add(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_identity() {
        let system = RyuutamaSystem::new();
        assert_eq!(system.system_id(), "ryuutama");
        assert_eq!(system.display_name(), "Ryuutama");
        assert_eq!(system.stat_names(), &["STR", "DEX", "INT", "SPI"]);
    }

    #[test]
    fn earned_increases_per_level() {
        let engine = RyuutamaSystem::new();
        assert_eq!(engine.earned_stat_increases(1), 0);
        assert_eq!(engine.earned_stat_increases(2), 3);
        assert_eq!(engine.earned_stat_increases(10), 27);
        assert_eq!(engine.earned_stat_increases(0), -3);
    }

    #[test]
    fn max_points_doubles_the_die() {
        let engine = RyuutamaSystem::new();
        assert_eq!(engine.max_points(10, 0, 0), 20);
        assert_eq!(engine.max_points(10, 5, 0), 25);
        assert_eq!(engine.max_points(6, -2, 3), 13);
    }

    #[test]
    fn capacity_strength_bonus_steps() {
        let engine = RyuutamaSystem::new();
        assert_eq!(engine.capacity_strength(6, false), 6);
        assert_eq!(engine.capacity_strength(6, true), 8);
        assert_eq!(engine.capacity_strength(12, true), 12);
        assert_eq!(engine.capacity_strength(5, true), 5);
    }

    #[test]
    fn carrying_capacity_formula() {
        assert_eq!(RyuutamaSystem::new().carrying_capacity(8, 3), 13);
    }

    #[test]
    fn formulas_saturate_instead_of_overflowing() {
        let engine = RyuutamaSystem::new();
        assert_eq!(engine.max_points(i32::MAX, 1, 1), i32::MAX);
        assert_eq!(engine.max_points(i32::MIN, -1, 0), i32::MIN);
        assert_eq!(engine.carrying_capacity(i32::MAX, 10), i32::MAX);
        assert_eq!(engine.earned_stat_increases(i32::MIN), i32::MIN);
    }

    #[test]
    fn usable_through_trait_object() {
        let system: Box<dyn GameSystem> = Box::new(RyuutamaSystem::new());
        assert_eq!(system.calculation_engine().level_from_experience(600), 3);
    }
}
