use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vizij_scroll_core::{
    AnimateOptions, Action, Geometry, Interpolation, ScrollHost, ScrollWatcher, StartPosition,
    Target,
};

struct Strip {
    scroll: f64,
}

impl ScrollHost for Strip {
    type Handle = usize;

    fn resolve(&mut self, id: &str) -> Option<usize> {
        id.strip_prefix("row-")?.parse().ok()
    }

    fn geometry(&mut self, handle: &usize) -> Geometry {
        Geometry::new(*handle as f64 * 120.0 - self.scroll, 100.0)
    }

    fn viewport_height(&mut self) -> f64 {
        900.0
    }
}

fn build(n: usize) -> ScrollWatcher<usize> {
    let mut w = ScrollWatcher::default();
    let positions = [StartPosition::Top, StartPosition::Middle, StartPosition::Bottom];
    for i in 0..n {
        let target = if i % 2 == 0 {
            Target::Direct(i)
        } else {
            Target::by_id(format!("row-{i}"))
        };
        let options = AnimateOptions::new()
            .start_position(positions[i % 3])
            .interpolation(Interpolation::Ease);
        w.register(target, Action::new(|x| {
            black_box(x);
        }), options)
            .expect("register");
    }
    w
}

fn bench_tick(c: &mut Criterion) {
    let mut w = build(1_000);
    let mut strip = Strip { scroll: 0.0 };
    c.bench_function("tick_1000_entries", |b| {
        b.iter(|| {
            strip.scroll = (strip.scroll + 37.0) % 120_000.0;
            black_box(w.tick(&mut strip));
        })
    });
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
