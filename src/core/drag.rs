//! Drag controller - pointer sequences and bin-drop resolution
//!
//! Translates pointer down/move/up into item movement and a drop decision,
//! decoupled from scoring policy (which lives in the session). Bin geometry
//! is handed in explicitly by the render layer; the controller never queries
//! the display.

use crate::types::{Category, DropOutcome, Phase, Point, Rect};

use crate::core::session::GameSession;

/// Screen geometry of the two drop targets, in the same play-area-local
/// coordinate space as item positions and pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinLayout {
    pub compost: Rect,
    pub trash: Rect,
}

impl BinLayout {
    /// Which bin contains the point, compost tested first.
    ///
    /// First match wins, so compost shadows trash if the rectangles ever
    /// overlap.
    pub fn bin_at(&self, p: Point) -> Option<Category> {
        if self.compost.contains(p) {
            Some(Category::Compost)
        } else if self.trash.contains(p) {
            Some(Category::Trash)
        } else {
            None
        }
    }

    pub fn rect(&self, bin: Category) -> Rect {
        match bin {
            Category::Compost => self.compost,
            Category::Trash => self.trash,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    item_id: u32,
    /// Pointer-to-item-origin offset, so the item does not snap to the
    /// cursor on the first move.
    offset: Point,
}

/// Tracks at most one pointer-down-to-pointer-up sequence.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    active: Option<ActiveDrag>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the item currently being dragged, for render emphasis.
    pub fn active_item(&self) -> Option<u32> {
        self.active.map(|d| d.item_id)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Start a drag at the pointer position.
    ///
    /// Succeeds only while the session is playing, no drag is active, and
    /// the pointer is over an item. Concurrent drag attempts are ignored.
    pub fn begin(&mut self, session: &GameSession, pointer: Point) -> bool {
        if session.phase() != Phase::Playing || self.active.is_some() {
            return false;
        }

        let Some(id) = session.item_at(pointer) else {
            return false;
        };
        // Item just resolved from the set; the lookup cannot fail.
        let Some(item) = session.item(id) else {
            return false;
        };

        self.active = Some(ActiveDrag {
            item_id: id,
            offset: Point::new(pointer.x - item.x, pointer.y - item.y),
        });
        true
    }

    /// Follow the pointer: the item's new origin is `pointer - offset`,
    /// unclamped. No-op unless a drag is active.
    pub fn update(&mut self, session: &mut GameSession, pointer: Point) {
        let Some(drag) = self.active else {
            return;
        };
        session.move_item(
            drag.item_id,
            pointer.x - drag.offset.x,
            pointer.y - drag.offset.y,
        );
    }

    /// Release the drag and resolve the drop.
    ///
    /// The bin test uses the release pointer position, not the item's box.
    /// Always clears the active drag, whatever the outcome. Returns `None`
    /// when no drag was active.
    pub fn end(
        &mut self,
        session: &mut GameSession,
        pointer: Point,
        bins: &BinLayout,
    ) -> Option<DropOutcome> {
        let drag = self.active.take()?;
        Some(session.score_drop(drag.item_id, bins.bin_at(pointer)))
    }
}
