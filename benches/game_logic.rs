use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_planet_patrol::core::{DragController, GameSession};
use tui_planet_patrol::term::{GameView, StageLayout, Viewport};
use tui_planet_patrol::types::{Category, Point};

fn ready_session(seed: u32) -> GameSession {
    let mut session = GameSession::new(seed);
    assert!(session.setup(78, 21));
    session
}

fn bench_setup(c: &mut Criterion) {
    c.bench_function("session_setup", |b| {
        b.iter(|| {
            let mut session = GameSession::new(black_box(12345));
            session.setup(black_box(78), black_box(21));
            black_box(session.items().len())
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    c.bench_function("session_tick_full_round", |b| {
        b.iter(|| {
            let mut session = ready_session(black_box(12345));
            while !session.is_finished() {
                session.tick();
            }
            black_box(session.time_left())
        })
    });
}

fn bench_item_at(c: &mut Criterion) {
    let session = ready_session(12345);
    let probe = {
        let item = session.items()[0];
        Point::new(item.x, item.y)
    };

    c.bench_function("session_item_at", |b| {
        b.iter(|| black_box(session.item_at(black_box(probe))))
    });
}

fn bench_score_drop(c: &mut Criterion) {
    c.bench_function("session_clear_board", |b| {
        b.iter(|| {
            let mut session = ready_session(black_box(12345));
            let plan: Vec<(u32, Category)> =
                session.items().iter().map(|i| (i.id, i.category)).collect();
            for (id, category) in plan {
                session.score_drop(id, Some(category));
            }
            black_box(session.score())
        })
    });
}

fn bench_drag_sequence(c: &mut Criterion) {
    let layout = StageLayout::compute(Viewport::new(80, 24));

    c.bench_function("drag_pick_move_release", |b| {
        b.iter(|| {
            let mut session = ready_session(black_box(12345));
            let mut drag = DragController::new();
            let item = session.items()[0];
            drag.begin(&session, Point::new(item.x, item.y));
            for step in 0..20 {
                drag.update(&mut session, Point::new(item.x + step, item.y));
            }
            black_box(drag.end(&mut session, Point::new(3, 15), &layout.bins))
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let session = ready_session(12345);
    let drag = DragController::new();
    let viewport = Viewport::new(80, 24);

    c.bench_function("view_render_80x24", |b| {
        b.iter(|| black_box(GameView.render(&session, &drag, None, viewport)))
    });
}

criterion_group!(
    benches,
    bench_setup,
    bench_tick,
    bench_item_at,
    bench_score_drop,
    bench_drag_sequence,
    bench_render
);
criterion_main!(benches);
