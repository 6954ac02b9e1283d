use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_debris::core::{CollisionIndex, GameConfig};
use tui_debris::engine::{Game, HeadlessCanvas, Playfield};
use tui_debris::term::{FrameCanvas, SpriteSheet};
use tui_debris::types::{Controls, Rect, HIT_SHRINK};

fn busy_game(seed: u64) -> Game {
    let (_, sprites) = HeadlessCanvas::with_default_sprites();
    let mut config = GameConfig::default();
    config.seed = Some(seed);
    let mut game = Game::new(config, Playfield::new(40, 120, 1), sprites).unwrap();
    game.populate();
    let world = game.world_mut();
    let epochs = u64::from(world.config.years.plasma_gun_year - world.config.years.start_year);
    let per_epoch = world.clock.epoch_ticks();
    world.clock.fast_forward(epochs * per_epoch);
    game
}

fn bench_headless_tick(c: &mut Criterion) {
    let (mut canvas, _) = HeadlessCanvas::with_default_sprites();
    let mut game = busy_game(12345);
    let mut controls = Controls::new(0, 0, true);

    c.bench_function("headless_tick", |b| {
        b.iter(|| {
            let _ = black_box(game.tick(&mut canvas, &mut controls));
        })
    });
}

fn bench_framebuffer_tick(c: &mut Criterion) {
    let (sheet, sprites) = SpriteSheet::builtin().unwrap();
    let mut canvas = FrameCanvas::new(40, 120, 1, sheet);
    let mut config = GameConfig::default();
    config.seed = Some(12345);
    let mut game = Game::new(config, Playfield::new(40, 120, 1), sprites).unwrap();
    game.populate();
    let mut controls = Controls::default();

    c.bench_function("framebuffer_tick", |b| {
        b.iter(|| {
            let _ = black_box(game.tick(&mut canvas, &mut controls));
        })
    });
}

fn bench_first_overlapping(c: &mut Criterion) {
    let mut index = CollisionIndex::new(Rect::new(0.0, 0.0, 40.0, 120.0));
    for i in 0..64 {
        let col = f64::from(i % 16) * 7.0;
        let row = f64::from(i / 16) * 8.0;
        index.insert(Rect::new(row, col, 4.0, 6.0));
    }
    let probe = Rect::point(39.0, 119.0);

    c.bench_function("first_overlapping_64", |b| {
        b.iter(|| black_box(index.first_overlapping(black_box(&probe), HIT_SHRINK)))
    });
}

criterion_group!(
    benches,
    bench_headless_tick,
    bench_framebuffer_tick,
    bench_first_overlapping
);
criterion_main!(benches);
