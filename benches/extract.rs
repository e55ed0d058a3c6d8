// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scraper::Html;

use etf_view::specs::etf;

const PAGE: &str = include_str!("../tests/fixtures/kodex200.html");

fn bench_extract(c: &mut Criterion) {
    c.bench_function("etf_extract", |b| {
        b.iter(|| {
            let r = etf::extract(black_box(PAGE));
            black_box(r.is_ok())
        })
    });

    // Selector walk only, on an already-parsed document.
    let doc = Html::parse_document(PAGE);
    c.bench_function("etf_extract_doc", |b| {
        b.iter(|| black_box(etf::extract_doc(black_box(&doc)).is_ok()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
