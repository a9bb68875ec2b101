//! Event mapping from terminal input to pointer events and meta actions.
//!
//! The drag controller only understands pointer coordinates in
//! play-area-local space; this module does the crossterm-to-local
//! translation so nothing downstream knows about terminal events.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::types::Point;

/// A pointer-sequence step, in play-area-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

/// Map a crossterm mouse event to a pointer event.
///
/// `origin` is the play area's screen origin; the returned point is local
/// to it (and may be negative when the pointer is above or left of the
/// stage). Only the left button participates in drags.
pub fn pointer_event(ev: MouseEvent, origin: Point) -> Option<PointerEvent> {
    let p = Point::new(ev.column as i32 - origin.x, ev.row as i32 - origin.y);
    match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down(p)),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Move(p)),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up(p)),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key confirms the summary screen (reports the final score).
pub fn is_confirm(key: KeyEvent) -> bool {
    key.code == KeyCode::Enter
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_left_button_sequence_maps_to_pointer_events() {
        let origin = Point::new(1, 2);

        assert_eq!(
            pointer_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 6), origin),
            Some(PointerEvent::Down(Point::new(4, 4)))
        );
        assert_eq!(
            pointer_event(mouse(MouseEventKind::Drag(MouseButton::Left), 7, 6), origin),
            Some(PointerEvent::Move(Point::new(6, 4)))
        );
        assert_eq!(
            pointer_event(mouse(MouseEventKind::Up(MouseButton::Left), 7, 6), origin),
            Some(PointerEvent::Up(Point::new(6, 4)))
        );
    }

    #[test]
    fn test_coordinates_left_of_origin_go_negative() {
        let origin = Point::new(10, 10);
        let ev = pointer_event(mouse(MouseEventKind::Down(MouseButton::Left), 3, 4), origin);
        assert_eq!(ev, Some(PointerEvent::Down(Point::new(-7, -6))));
    }

    #[test]
    fn test_other_buttons_and_motion_are_ignored() {
        let origin = Point::new(0, 0);
        assert_eq!(
            pointer_event(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1), origin),
            None
        );
        assert_eq!(
            pointer_event(mouse(MouseEventKind::Moved, 1, 1), origin),
            None
        );
        assert_eq!(
            pointer_event(mouse(MouseEventKind::ScrollDown, 1, 1), origin),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_confirm_key() {
        assert!(is_confirm(KeyEvent::from(KeyCode::Enter)));
        assert!(!is_confirm(KeyEvent::from(KeyCode::Char(' '))));
    }
}
