use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sc2grid::sparse::CsrMatrix;

fn screen_like_grid(fill_every: usize) -> Vec<i32> {
    (0..84 * 84).map(|i| if i % fill_every == 0 { (i % 255) as i32 + 1 } else { 0 }).collect()
}

fn bench_from_dense(c: &mut Criterion) {
    let sparse_grid = screen_like_grid(50);
    let dense_grid = screen_like_grid(2);

    c.bench_function("csr_from_dense_sparse_84x84", |b| {
        b.iter(|| CsrMatrix::from_dense(black_box(&sparse_grid), 84, 84))
    });
    c.bench_function("csr_from_dense_dense_84x84", |b| {
        b.iter(|| CsrMatrix::from_dense(black_box(&dense_grid), 84, 84))
    });
    let m = CsrMatrix::from_dense(&sparse_grid, 84, 84);
    c.bench_function("csr_to_dense_84x84", |b| b.iter(|| black_box(&m).to_dense()));
}

criterion_group!(benches, bench_from_dense);
criterion_main!(benches);
