use criterion::{black_box, criterion_group, criterion_main, Criterion};
use brainmatch::core::{Board, BoardRng, Deck, GameSnapshot, MatchGame};
use brainmatch::term::{FrameBuffer, GameView, Screen, UiView, Viewport};

fn bench_tick(c: &mut Criterion) {
    let mut game = MatchGame::new(12345);
    game.new_game(Deck::standard());

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(16));
        })
    });
}

fn bench_shuffle(c: &mut Criterion) {
    let deck = Deck::standard();
    let mut rng = BoardRng::new(12345);

    c.bench_function("shuffle_standard_deck", |b| {
        b.iter(|| Board::shuffled(black_box(&deck), &mut rng))
    });
}

fn bench_flip_and_resolve(c: &mut Criterion) {
    let mut game = MatchGame::new(12345);
    game.new_game(Deck::standard());

    // A mismatched pair goes face-down again after each tick, so every
    // iteration measures the same flip / flip / unflip cycle.
    let tiles = game.board().tiles();
    let other = tiles
        .iter()
        .position(|t| t.symbol != tiles[0].symbol)
        .unwrap_or(1);

    c.bench_function("flip_pair_and_unflip", |b| {
        b.iter(|| {
            let _ = game.flip(black_box(0));
            let _ = game.flip(black_box(other));
            game.tick(1000);
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let mut game = MatchGame::new(12345);
    game.new_game(Deck::standard());
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

fn bench_render_board(c: &mut Criterion) {
    let mut game = MatchGame::new(12345);
    game.new_game(Deck::standard());
    let _ = game.flip(0);
    let snap = game.snapshot();
    let view = GameView::default();
    let ui = UiView {
        screen: Screen::Playing,
        ..UiView::default()
    };
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_board_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), &ui, Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_shuffle,
    bench_flip_and_resolve,
    bench_snapshot_into,
    bench_render_board
);
criterion_main!(benches);
