use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use critter_world::world::{Legend, World};

/// Walled arena with critters sprinkled deterministically
fn build_plan(size: usize) -> Vec<String> {
    (0..size)
        .map(|y| {
            (0..size)
                .map(|x| {
                    if x == 0 || y == 0 || x == size - 1 || y == size - 1 {
                        '#'
                    } else if (x * 7 + y * 13) % 31 == 0 {
                        'o'
                    } else {
                        ' '
                    }
                })
                .collect()
        })
        .collect()
}

fn bench_turns(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_turn");
    for &size in &[32usize, 128] {
        let plan = build_plan(size);
        let rows: Vec<&str> = plan.iter().map(String::as_str).collect();
        group.bench_function(format!("{size}x{size}_32_turns"), |b| {
            b.iter_batched(
                || {
                    World::from_layout(&rows, Legend::standard(), 0xBEEF)
                        .expect("generated layout is rectangular")
                },
                |mut world| {
                    for _ in 0..32 {
                        world.turn();
                    }
                    world
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_turns);
criterion_main!(benches);
