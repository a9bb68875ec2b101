//! Core module - pure game logic with no external dependencies
//!
//! This module contains the catalog, session state machine and drag
//! controller. It has zero dependencies on UI or I/O and is fully
//! deterministic per seed.

pub mod catalog;
pub mod drag;
pub mod rng;
pub mod session;

// Re-export commonly used types
pub use catalog::{CatalogEntry, CATALOG, CATALOG_LEN};
pub use drag::{BinLayout, DragController};
pub use rng::SimpleRng;
pub use session::{DropEvent, GameSession, Item};
