use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rps_plus::core::{GameRng, Move};
use rps_plus::rules::GameLogic;
use rps_plus::session::Game;

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_all_pairs", |b| {
        b.iter(|| {
            for user in Move::ALL {
                for bot in Move::ALL {
                    black_box(GameLogic::resolve(black_box(user), black_box(bot)));
                }
            }
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    let mut seed = GameRng::new(1);
    c.bench_function("full_game", |b| {
        b.iter(|| {
            let mut game = Game::seeded(seed.gen_range(0..i32::MAX) as u64);
            for mv in ["rock", "bomb", "scissors"] {
                let _ = black_box(game.submit(mv));
            }
            black_box(game.snapshot())
        })
    });
}

criterion_group!(benches, bench_resolve, bench_full_game);
criterion_main!(benches);
