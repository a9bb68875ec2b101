//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view projects session state
//! into a framebuffer, and the renderer flushes whole frames to the
//! terminal. The view stays pure so it can be unit-tested; all I/O lives in
//! [`renderer`].

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BinFlash, GameView, StageLayout, Viewport};
pub use renderer::TerminalRenderer;
