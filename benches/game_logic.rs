use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_klondike::core::{Board, DeckRng, GameSnapshot, GameState};
use tui_klondike::types::GameEvent;

fn bench_deal(c: &mut Criterion) {
    c.bench_function("deal_full_deck", |b| {
        let mut rng = DeckRng::new(12345);
        b.iter(|| {
            let mut board = Board::new();
            black_box(board.deal(&mut rng));
        })
    });
}

fn bench_event_dispatch(c: &mut Criterion) {
    let mut game = GameState::new(12345);
    let script = [
        GameEvent::MoveUp,
        GameEvent::Activate,
        GameEvent::MoveRight,
        GameEvent::MoveDown,
        GameEvent::Activate,
        GameEvent::Cancel,
        GameEvent::MoveLeft,
    ];

    c.bench_function("event_script", |b| {
        b.iter(|| {
            for event in script {
                game.apply_event(black_box(event));
            }
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = GameState::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_capture", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(benches, bench_deal, bench_event_dispatch, bench_snapshot);
criterion_main!(benches);
