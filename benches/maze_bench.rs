use criterion::{criterion_group, criterion_main, Criterion};
use grid_maze::Maze;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn maze_bench(c: &mut Criterion) {
    for n in [6, 12, 24, 48] {
        let maze = Maze::with_rng(n, n, StdRng::seed_from_u64(0)).unwrap();
        c.bench_function(format!("shortest path, {n}x{n}").as_str(), |b| {
            b.iter(|| black_box(maze.shortest_path()))
        });
    }
    let mut maze = Maze::with_rng(24, 24, StdRng::seed_from_u64(0)).unwrap();
    c.bench_function("regenerate, 24x24", |b| {
        b.iter(|| maze.regenerate().unwrap())
    });
}

criterion_group!(benches, maze_bench);
criterion_main!(benches);
