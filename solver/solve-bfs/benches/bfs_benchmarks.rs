//! Benchmarks for the breadth-first search loop.

use criterion::{criterion_group, criterion_main, Criterion};
use maze_grid::{CellCoord, Direction, Maze, MazeBuilder};
use solve_bfs::solve;

/// Builds a fully open `size x size` grid.
fn open_grid(size: u32) -> Maze {
    let mut builder = MazeBuilder::new(size, size);
    for row in 0..size {
        for col in 0..size {
            let coord = CellCoord::new(row, col);
            if col + 1 < size {
                builder = builder.open(coord, Direction::East).unwrap();
            }
            if row + 1 < size {
                builder = builder.open(coord, Direction::South).unwrap();
            }
        }
    }
    builder.build().unwrap()
}

/// Builds a `size x size` serpentine corridor, the worst case for a
/// corner-to-corner query.
fn serpentine(size: u32) -> Maze {
    let mut builder = MazeBuilder::new(size, size);
    for row in 0..size {
        for col in 0..size.saturating_sub(1) {
            builder = builder
                .open(CellCoord::new(row, col), Direction::East)
                .unwrap();
        }
        if row + 1 < size {
            let col = if row % 2 == 0 { size - 1 } else { 0 };
            builder = builder
                .open(CellCoord::new(row, col), Direction::South)
                .unwrap();
        }
    }
    builder.build().unwrap()
}

fn bench_bfs(c: &mut Criterion) {
    let open = open_grid(64);
    c.bench_function("bfs_open_64x64", |b| {
        b.iter(|| solve(&open, CellCoord::origin(), CellCoord::new(63, 63)).unwrap());
    });

    let snake = serpentine(64);
    c.bench_function("bfs_serpentine_64x64", |b| {
        b.iter(|| solve(&snake, CellCoord::origin(), CellCoord::new(63, 63)).unwrap());
    });
}

criterion_group!(benches, bench_bfs);
criterion_main!(benches);
