//! Planet Patrol: a terminal drag-and-drop sorting game.
//!
//! Ten waste items land in a play area and a 30-second countdown starts.
//! Drag each item with the mouse and drop it over the compost or trash bin;
//! a matching drop scores +10 and removes the item, a wrong bin costs 5
//! points (never below zero), a miss leaves the item where it fell. The
//! round ends when the clock runs out or the last item is sorted, whichever
//! happens first.
//!
//! The crate splits the same way the gameplay does:
//!
//! - [`core`]: deterministic, I/O-free game logic (catalog, session state
//!   machine, drag controller)
//! - [`term`]: pure framebuffer view plus the crossterm flusher
//! - [`input`]: crossterm event translation
//! - [`types`]: shared plain types and tuning constants
//!
//! # Example
//!
//! ```
//! use tui_planet_patrol::core::{BinLayout, DragController, GameSession};
//! use tui_planet_patrol::types::{Point, Rect};
//!
//! let mut session = GameSession::new(12345);
//! assert!(session.setup(60, 20));
//!
//! let bins = BinLayout {
//!     compost: Rect::new(2, 14, 12, 4),
//!     trash: Rect::new(46, 14, 12, 4),
//! };
//!
//! // Pick up the first item and drop it on the compost bin.
//! let mut drag = DragController::new();
//! let item = session.items()[0];
//! assert!(drag.begin(&session, Point::new(item.x, item.y)));
//! drag.update(&mut session, Point::new(3, 15));
//! drag.end(&mut session, Point::new(3, 15), &bins);
//! ```

pub mod core;
pub mod input;
pub mod term;
pub mod types;
