//! Common utility functions shared across the domain and the engine.
//!
//! Pure functions only: no side effects, no I/O.

pub mod sheet_keys;
pub mod string;

// Re-export commonly used functions at crate root for convenience
pub use sheet_keys::deserialize_known_keys;
pub use string::slugify;
