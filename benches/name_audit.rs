#[macro_use]
extern crate criterion;

mod bench {
    use name_audit::decompose;

    use criterion::{black_box, Criterion};

    pub fn decompose_first_last(c: &mut Criterion) {
        c.bench_function("first last", |b| {
            b.iter(|| {
                let result = decompose(Some("Juan Garcia"));
                black_box(result.confidence)
            })
        });
    }

    pub fn decompose_sort_order(c: &mut Criterion) {
        c.bench_function("last, first", |b| {
            b.iter(|| {
                let result = decompose(Some("Garcia, Juan Q."));
                black_box(result.confidence)
            })
        });
    }

    pub fn decompose_needs_namecase(c: &mut Criterion) {
        c.bench_function("all-caps", |b| {
            b.iter(|| {
                let result = decompose(Some("JAIME GARCIA"));
                black_box(result.confidence)
            })
        });
    }

    pub fn decompose_placeholder(c: &mut Criterion) {
        c.bench_function("placeholder", |b| {
            b.iter(|| {
                let result = decompose(Some("test user"));
                black_box(result.confidence)
            })
        });
    }

    pub fn decompose_complex(c: &mut Criterion) {
        c.bench_function("complex", |b| {
            b.iter(|| {
                let result = decompose(Some("Dr. Ludwig van der Rohe-Smith Jr."));
                black_box(result.confidence)
            })
        });
    }

    pub fn decompose_non_latin(c: &mut Criterion) {
        c.bench_function("non-latin", |b| {
            b.iter(|| {
                let result = decompose(Some("田中 太郎"));
                black_box(result.confidence)
            })
        });
    }
}

criterion_group!(
    benches,
    bench::decompose_first_last,
    bench::decompose_sort_order,
    bench::decompose_needs_namecase,
    bench::decompose_placeholder,
    bench::decompose_complex,
    bench::decompose_non_latin,
);
criterion_main!(benches);
