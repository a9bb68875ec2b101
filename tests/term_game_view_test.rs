//! Rendering tests: project session state through `GameView` into a
//! framebuffer and assert on its textual content.

use tui_planet_patrol::core::{DragController, GameSession};
use tui_planet_patrol::term::{BinFlash, FrameBuffer, GameView, StageLayout, Viewport};
use tui_planet_patrol::types::{Category, DropOutcome, Point};

const VIEW: Viewport = Viewport {
    width: 80,
    height: 24,
};

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    let mut s = String::new();
    for x in 0..fb.width() {
        let cell = fb.get(x, y).unwrap();
        if !cell.is_continuation() {
            s.push(cell.ch);
        }
    }
    s
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| row_text(fb, y) + "\n").collect()
}

fn ready_session(seed: u32) -> GameSession {
    let layout = StageLayout::compute(VIEW);
    let mut session = GameSession::new(seed);
    assert!(session.setup(layout.play_area.w, layout.play_area.h));
    session
}

#[test]
fn test_hud_shows_score_and_time() {
    let session = ready_session(5);
    let fb = GameView.render(&session, &DragController::new(), None, VIEW);

    let hud = row_text(&fb, 0);
    assert!(hud.contains("SCORE 0"), "hud was: {hud:?}");
    assert!(hud.contains("TIME 30s"), "hud was: {hud:?}");
}

#[test]
fn test_bins_are_labelled() {
    let session = ready_session(5);
    let fb = GameView.render(&session, &DragController::new(), None, VIEW);

    let text = screen_text(&fb);
    assert!(text.contains("COMPOST"));
    assert!(text.contains("TRASH"));
}

#[test]
fn test_all_items_appear_on_the_stage() {
    let mut session = ready_session(5);
    let layout = StageLayout::compute(VIEW);

    // Spread the items out so none hides another.
    let ids: Vec<u32> = session.items().iter().map(|i| i.id).collect();
    for (n, id) in ids.iter().enumerate() {
        session.move_item(*id, 2 + 4 * n as i32, 2);
    }

    let fb = GameView.render(&session, &DragController::new(), None, VIEW);
    for item in session.items() {
        let sx = (layout.play_area.x + item.x) as u16;
        let sy = (layout.play_area.y + item.y) as u16;
        assert_eq!(fb.get(sx, sy).unwrap().ch, item.glyph);
    }
}

#[test]
fn test_dragged_item_draws_on_top_of_others() {
    let mut session = ready_session(5);
    let under = session.items()[0];
    // The last item in set order is topmost at its own origin, so the press
    // is guaranteed to grab it.
    let dragged = *session.items().last().unwrap();

    let mut drag = DragController::new();
    assert!(drag.begin(&session, Point::new(dragged.x, dragged.y)));
    drag.update(&mut session, Point::new(under.x, under.y));

    let layout = StageLayout::compute(VIEW);
    let fb = GameView.render(&session, &drag, None, VIEW);

    let sx = (layout.play_area.x + under.x) as u16;
    let sy = (layout.play_area.y + under.y) as u16;
    assert_eq!(fb.get(sx, sy).unwrap().ch, dragged.glyph);
}

#[test]
fn test_item_outside_play_area_is_hidden() {
    let mut session = ready_session(5);
    let id = session.items()[0].id;
    session.move_item(id, -10, -10);

    let fb = GameView.render(&session, &DragController::new(), None, VIEW);
    let glyph = session.item(id).unwrap().glyph;
    assert!(!screen_text(&fb).contains(glyph));
}

#[test]
fn test_flash_recolors_only_the_hit_bin() {
    let session = ready_session(5);
    let layout = StageLayout::compute(VIEW);
    let flash = BinFlash {
        bin: Category::Compost,
        correct: false,
        remaining_ms: 200,
    };

    let plain = GameView.render(&session, &DragController::new(), None, VIEW);
    let flashed = GameView.render(&session, &DragController::new(), Some(&flash), VIEW);

    let probe = |fb: &FrameBuffer, bin: Category| {
        let r = layout.bins.rect(bin);
        let x = (layout.play_area.x + r.x) as u16;
        let y = (layout.play_area.y + r.y) as u16;
        fb.get(x, y).unwrap().style.bg
    };

    assert_ne!(
        probe(&plain, Category::Compost),
        probe(&flashed, Category::Compost)
    );
    assert_eq!(probe(&plain, Category::Trash), probe(&flashed, Category::Trash));
}

#[test]
fn test_summary_screen_reports_score() {
    let mut session = ready_session(5);
    let plan: Vec<(u32, Category)> = session.items().iter().map(|i| (i.id, i.category)).collect();
    for (id, category) in plan {
        assert_eq!(
            session.score_drop(id, Some(category)),
            DropOutcome::Correct
        );
    }
    assert!(session.is_finished());

    let fb = GameView.render(&session, &DragController::new(), None, VIEW);
    let text = screen_text(&fb);

    assert!(text.contains("GAME OVER"));
    assert!(text.contains("You scored 100 points!"));
    assert!(text.contains("Press Enter to complete the mission"));
    // The board itself is gone.
    assert!(!text.contains("COMPOST"));
}
