use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use antlattice_core::{AntLine, AntPlane, scatter_line_ants, scatter_plane_ants};

fn bench_plane_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("plane_step");
    let steps = 64usize;
    for &side in &[100usize, 300, 600] {
        group.bench_function(format!("steps{steps}_side{side}"), |b| {
            b.iter_batched(
                || {
                    let mut plane = AntPlane::new(side, side).expect("plane");
                    let mut rng = SmallRng::seed_from_u64(0xBEEF);
                    scatter_plane_ants(&mut plane, &mut rng, 49);
                    plane
                },
                |mut plane| {
                    for _ in 0..steps {
                        plane.step_forward();
                    }
                    plane
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_line_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_step");
    let steps = 1024usize;
    for &width in &[100usize, 10_000] {
        group.bench_function(format!("steps{steps}_width{width}"), |b| {
            b.iter_batched(
                || {
                    let mut line = AntLine::new(width).expect("line");
                    let mut rng = SmallRng::seed_from_u64(0xBEEF);
                    scatter_line_ants(&mut line, &mut rng, 3);
                    line
                },
                |mut line| {
                    for _ in 0..steps {
                        line.step_forward();
                    }
                    line
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_plane_steps, bench_line_steps);
criterion_main!(benches);
