use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spinframe::prelude::*;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 800;

fn engine_for(mesh: MeshPreset) -> Engine {
    Engine::new(Config {
        mesh,
        ..Config::default()
    })
    .expect("preset config is valid")
}

fn benchmark_single_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_frame");

    for preset in MeshPreset::ALL {
        group.bench_with_input(
            BenchmarkId::new("cpu_renderer", preset),
            &preset,
            |b, &preset| {
                let mut engine = engine_for(preset);
                let mut renderer = Renderer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
                b.iter(|| black_box(engine.frame(&mut renderer)));
            },
        );
    }

    group.finish();
}

fn benchmark_pipeline(c: &mut Criterion) {
    let transform = Transform::new(1.0);
    let vertex = Vec3::new(-0.25, 0.25, 0.25);

    c.bench_function("vertex_to_screen", |b| {
        b.iter(|| transform.to_screen(black_box(vertex), BUFFER_WIDTH, BUFFER_HEIGHT));
    });
}

fn benchmark_run_loop(c: &mut Criterion) {
    c.bench_function("run_loop_30_frames", |b| {
        let mut renderer = Renderer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        b.iter(|| {
            let mut engine = engine_for(MeshPreset::Cube);
            let mut left = 30;
            engine
                .run(&mut renderer, &mut NoDelay, |_, _| {
                    left -= 1;
                    Ok(if left == 0 {
                        LoopControl::Stop
                    } else {
                        LoopControl::Continue
                    })
                })
                .expect("headless loop does not fail")
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_frame,
    benchmark_pipeline,
    benchmark_run_loop
);
criterion_main!(benches);
