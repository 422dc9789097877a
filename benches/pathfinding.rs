use bevy_math::ivec2;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pixel_nav::{palette, solve, Distance, Params, PathfinderKind, Raster, WorldKind};

/// A 1024×1024 field with staggered walls, leaving a winding corridor
/// between the corners.
fn fixture() -> Raster {
    let mut raster = Raster::new(1024, 1024, palette::SAFE);
    raster.fill_rect(192, 0, 32, 768, palette::UNSAFE);
    raster.fill_rect(448, 256, 32, 768, palette::UNSAFE);
    raster.fill_rect(704, 0, 32, 768, palette::UNSAFE);
    raster
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(50);

    let raster = fixture();
    let cases = [
        ("grid_astar", WorldKind::Grid, PathfinderKind::AStar),
        ("grid_jps", WorldKind::Grid, PathfinderKind::Jps),
        ("qtree_astar", WorldKind::QTree, PathfinderKind::AStar),
    ];

    for (name, world, pathfinder) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut params = Params::new(
                    pathfinder,
                    Distance::Euclidean,
                    ivec2(32, 32),
                    ivec2(992, 992),
                );
                params.world = world;
                params.cell_size = 16;

                let result = solve(black_box(&raster), black_box(&params)).unwrap();
                black_box(result);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
