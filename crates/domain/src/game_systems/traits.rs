//! Game system traits for TTRPG-specific mechanics.
//!
//! These traits define the interface for system-specific calculations,
//! allowing rules to be swapped or tested in isolation while sharing a
//! common API with the embedding application.

/// Core trait all game systems must implement.
///
/// This trait provides system identification and access to the calculation engine.
pub trait GameSystem: Send + Sync {
    /// Unique identifier for this game system (e.g., "ryuutama").
    fn system_id(&self) -> &str;

    /// Human-readable display name.
    fn display_name(&self) -> &str;

    /// Get the calculation engine for this system.
    fn calculation_engine(&self) -> &dyn CalculationEngine;

    /// List of stat names used by this system.
    fn stat_names(&self) -> &[&str];
}

/// Calculation rules that vary per game system.
///
/// Implements the arithmetic behind derived character values. None of these
/// fail: inputs outside the tables are resolved to a defined value.
pub trait CalculationEngine: Send + Sync {
    /// Character level for an experience total.
    fn level_from_experience(&self, exp: i32) -> i32;

    /// Number of HP/MP increases a character of `level` may allocate.
    fn earned_stat_increases(&self, level: i32) -> i32;

    /// Maximum HP or MP from the governing die, equipment modifiers and
    /// allocated increases.
    fn max_points(&self, die: i32, modifiers: i32, allocated: i32) -> i32;

    /// Strength die used for carrying capacity, after an optional bonus step.
    fn capacity_strength(&self, die: i32, bonus: bool) -> i32;

    /// Maximum carried weight.
    fn carrying_capacity(&self, strength: i32, level: i32) -> i32;
}
