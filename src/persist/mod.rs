//! Persistenz-Schicht: JSON-Stores pro Layer (Punkte, Keyframes).

pub mod keyframes;
pub mod points;

pub use keyframes::{parse_keyframes, write_keyframes};
pub use points::{parse_points_store, write_points_store, ParsedPoints};
