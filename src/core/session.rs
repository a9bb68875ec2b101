//! Game session state machine
//!
//! Owns the active item set, the score, the countdown and the lifecycle
//! phase. The session is pure and deterministic: it never touches a clock or
//! a terminal, it only reacts to `setup`, `tick` and drop requests from the
//! host. All invalid requests (stale item ids, drops after the game ended)
//! are silent no-ops rather than errors.

use arrayvec::ArrayVec;

use crate::core::catalog::{self, CATALOG_LEN};
use crate::core::rng::SimpleRng;
use crate::types::{
    Category, DropOutcome, Phase, Point, Rect, BIN_H, BIN_INSET, CORRECT_DROP_POINTS,
    GAME_DURATION_SECS, ITEM_H, ITEM_TARGET_COUNT, ITEM_W, MIN_PLAY_AREA_H, MIN_PLAY_AREA_W,
    SPAWN_MARGIN, WRONG_DROP_PENALTY,
};

/// A sortable item placed in the play area.
///
/// Positions are the item's top-left corner in play-area-local cells and are
/// deliberately unclamped: a drag may move an item outside the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub id: u32,
    pub glyph: char,
    pub category: Category,
    pub x: i32,
    pub y: i32,
}

impl Item {
    /// The cells this item occupies, for pointer hit-testing.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, ITEM_W, ITEM_H)
    }
}

/// A scored drop against a bin (consumed by the render host for feedback).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropEvent {
    pub bin: Category,
    pub outcome: DropOutcome,
}

/// Complete session state for one round of the sorting game.
#[derive(Debug, Clone)]
pub struct GameSession {
    items: ArrayVec<Item, CATALOG_LEN>,
    score: u32,
    time_left: u32,
    phase: Phase,
    rng: SimpleRng,
    /// Last bin-hitting drop (consumed by the host, `Miss` records nothing).
    last_drop: Option<DropEvent>,
}

impl GameSession {
    /// Create a new session with the given RNG seed.
    ///
    /// The item set starts empty; call [`setup`](Self::setup) once the play
    /// area has been measured.
    pub fn new(seed: u32) -> Self {
        Self {
            items: ArrayVec::new(),
            score: 0,
            time_left: GAME_DURATION_SECS,
            phase: Phase::Playing,
            rng: SimpleRng::new(seed),
            last_drop: None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Topmost item under the pointer, if any.
    ///
    /// Items are drawn in set order, so the last match is the one on top.
    pub fn item_at(&self, p: Point) -> Option<u32> {
        self.items.iter().rev().find(|i| i.bounds().contains(p)).map(|i| i.id)
    }

    /// Populate the item set for a measured play area.
    ///
    /// Returns `false` without touching the set when the play area is smaller
    /// than the minimum playable size; the host retries once after a short
    /// delay to let layout settle. Each spawned item lands fully inside the
    /// bounds minus [`SPAWN_MARGIN`], and above the bin row so nothing starts
    /// on top of a drop target. Calling again replaces the entire set.
    pub fn setup(&mut self, width: i32, height: i32) -> bool {
        if width < MIN_PLAY_AREA_W || height < MIN_PLAY_AREA_H {
            return false;
        }

        let Some(entries) = catalog::sample(&mut self.rng, ITEM_TARGET_COUNT) else {
            return false;
        };

        let max_x = width - ITEM_W - SPAWN_MARGIN;
        let max_y = height - ITEM_H - SPAWN_MARGIN - BIN_H - BIN_INSET;

        self.items.clear();
        for (i, entry) in entries.iter().enumerate() {
            let x = self.rng.next_range_i32(SPAWN_MARGIN, max_x + 1);
            let y = self.rng.next_range_i32(SPAWN_MARGIN, max_y + 1);
            self.items.push(Item {
                id: i as u32,
                glyph: entry.glyph,
                category: entry.category,
                x,
                y,
            });
        }

        true
    }

    /// Advance the countdown by one whole second.
    ///
    /// Transitions to `Finished` when the timer reaches zero. No-op once
    /// finished: the terminal transition is final and no later tick may
    /// mutate state.
    pub fn tick(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.phase = Phase::Finished;
        }
    }

    /// Move an item to a new top-left position, unclamped.
    ///
    /// Stale ids and post-game requests are ignored.
    pub fn move_item(&mut self, id: u32, x: i32, y: i32) {
        if self.phase != Phase::Playing {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.x = x;
            item.y = y;
        }
    }

    /// Score a released item against the bin it was dropped over.
    ///
    /// | Drop location          | Match | Score         | Item    |
    /// |------------------------|-------|---------------|---------|
    /// | matching bin           | yes   | +10           | removed |
    /// | wrong-category bin     | no    | -5 (floor 0)  | kept    |
    /// | outside both bins      | n/a   | unchanged     | kept    |
    ///
    /// Removing the last item finishes the session immediately, independent
    /// of the timer. Stale ids and post-game drops return `Miss` and change
    /// nothing.
    pub fn score_drop(&mut self, id: u32, bin: Option<Category>) -> DropOutcome {
        if self.phase != Phase::Playing {
            return DropOutcome::Miss;
        }

        let Some(idx) = self.items.iter().position(|i| i.id == id) else {
            return DropOutcome::Miss;
        };
        let Some(bin) = bin else {
            return DropOutcome::Miss;
        };

        if self.items[idx].category == bin {
            self.score += CORRECT_DROP_POINTS;
            self.items.remove(idx);
            self.last_drop = Some(DropEvent {
                bin,
                outcome: DropOutcome::Correct,
            });
            if self.items.is_empty() {
                self.phase = Phase::Finished;
            }
            DropOutcome::Correct
        } else {
            self.score = self.score.saturating_sub(WRONG_DROP_PENALTY);
            self.last_drop = Some(DropEvent {
                bin,
                outcome: DropOutcome::Wrong,
            });
            DropOutcome::Wrong
        }
    }

    /// Take and clear the last bin-hitting drop event.
    pub fn take_last_drop(&mut self) -> Option<DropEvent> {
        self.last_drop.take()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
