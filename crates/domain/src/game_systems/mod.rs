//! Game system implementations.
//!
//! This module provides system-specific calculation engines for tabletop
//! roleplaying games. Each system implements the core traits defined in
//! `traits.rs`.
//!
//! # Supported Systems
//!
//! - Ryuutama (`ryuutama`)

mod ryuutama;
mod traits;

pub use ryuutama::{ProgressionTables, RyuutamaSystem, CHARACTER_EXP_LEVELS, DICE};

// Core traits
pub use traits::{CalculationEngine, GameSystem};
