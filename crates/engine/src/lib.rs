//! Ryuutama engine library.
//!
//! The embedding side of the domain crate: configuration from the
//! environment and the load → prepare → project lifecycle for actor
//! documents.
//!
//! ## Structure
//!
//! - `config` - Environment configuration
//! - `sheet` - Actor document loading and preparation

pub mod config;
pub mod sheet;

pub use config::EngineConfig;
pub use sheet::{load_actor, load_tables, prepare_sheet, PreparedSheet};
