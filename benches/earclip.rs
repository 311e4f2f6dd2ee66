use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rtriangulate::data::Polygon;
use rtriangulate::Triangulate;

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = rand::thread_rng();
  c.bench_function("triangulate(convex 20)", |b| {
    b.iter_batched(
      || Polygon::<f64>::random_convex(20, &mut rng),
      |poly| poly.triangulate(),
      BatchSize::SmallInput,
    )
  });
  c.bench_function("triangulate(convex 1000)", |b| {
    b.iter_batched(
      || Polygon::<f64>::random_convex(1000, &mut rng),
      |poly| poly.triangulate(),
      BatchSize::LargeInput,
    )
  });
  let arrow = Polygon::from_flat(&[0.0, 0.0, 2.0, 1.0, 4.0, 0.0, 4.0, 3.0, 0.0, 3.0]).unwrap();
  c.bench_function("triangulate(arrow)", |b| b.iter(|| arrow.triangulate()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
