//! Terminal input module.
//!
//! Maps crossterm key and mouse events into pointer events for the drag
//! controller and meta actions (quit, confirm) for the host loop.

pub mod handler;

pub use handler::{is_confirm, pointer_event, should_quit, PointerEvent};
