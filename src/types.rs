//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Item footprint in terminal cells (emoji glyphs render two columns wide).
pub const ITEM_W: i32 = 2;
pub const ITEM_H: i32 = 1;

/// Margin kept between spawned items and the play-area edges.
pub const SPAWN_MARGIN: i32 = 2;

/// Smallest play area the session will populate. Below this, setup defers.
pub const MIN_PLAY_AREA_W: i32 = 40;
pub const MIN_PLAY_AREA_H: i32 = 12;

/// Bin footprint and inset from the play-area corners.
pub const BIN_W: i32 = 12;
pub const BIN_H: i32 = 4;
pub const BIN_INSET: i32 = 2;

/// Session tuning.
pub const GAME_DURATION_SECS: u32 = 30;
pub const ITEM_TARGET_COUNT: usize = 10;

/// Scoring policy.
pub const CORRECT_DROP_POINTS: u32 = 10;
pub const WRONG_DROP_PENALTY: u32 = 5;

/// Timing (milliseconds).
pub const FRAME_MS: u32 = 16;
pub const BIN_FLASH_MS: u32 = 400;
pub const SETUP_RETRY_DELAY_MS: u64 = 100;

/// Disposal categories. Each bin accepts exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Compost,
    Trash,
}

impl Category {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Compost => "compost",
            Category::Trash => "trash",
        }
    }
}

/// Session lifecycle phase. `Finished` is terminal within the core;
/// restarting is the host's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Finished,
}

/// Result of releasing a dragged item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Over a bin whose category matches the item.
    Correct,
    /// Over a bin, wrong category.
    Wrong,
    /// Outside both bins.
    Miss,
}

impl DropOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropOutcome::Correct => "correct",
            DropOutcome::Wrong => "wrong",
            DropOutcome::Miss => "miss",
        }
    }
}

/// A position in play-area-local cell coordinates.
///
/// Coordinates are signed: a dragged item may leave the play area and is
/// never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned cell rectangle with inclusive edge containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rightmost column still inside the rect.
    pub const fn right(&self) -> i32 {
        self.x + self.w - 1
    }

    /// Bottom row still inside the rect.
    pub const fn bottom(&self) -> i32 {
        self.y + self.h - 1
    }

    /// Closed-interval containment: edges count as inside.
    pub fn contains(&self, p: Point) -> bool {
        self.w > 0
            && self.h > 0
            && p.x >= self.x
            && p.x <= self.right()
            && p.y >= self.y
            && p.y <= self.bottom()
    }
}
