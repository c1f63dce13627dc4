// benches/parse_render.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fcc_catalog::catalog::{view::filter_indices, Catalog, ColumnMap};
use fcc_catalog::config::options::ParseOptions;
use fcc_catalog::render::render_table;

/// Synthetic catalog in the on-disk format, `rows` records plus the trailing line.
fn synthetic(rows: usize) -> String {
    let mut text = String::new();
    for i in 0..rows {
        text.push_str(&format!(
            "wzp6_ee_sample{i}_ecm240,,{n},,{n},,{f},,0,,0,,{gb:.2},,/eos/experiment/fcc/ee/generation/DelphesEvents/winter2023/IDEA/wzp6_ee_sample{i}_ecm240,,e+e- to sample {i},,inclusive,,0.0{i},,1.0,,1.0\n",
            n = 100_000 * (i + 1),
            f = i + 1,
            gb = i as f64 * 1.7,
        ));
    }
    text.push('\n');
    text
}

fn bench_catalog(c: &mut Criterion) {
    let text = synthetic(2_000);
    let opts = ParseOptions::default();
    let catalog = Catalog::parse(&text, &opts);
    let columns = ColumnMap::catalog();

    c.bench_function("parse_2000", |b| {
        b.iter(|| {
            let catalog = Catalog::parse(black_box(&text), &opts);
            black_box(catalog.len())
        })
    });

    c.bench_function("render_table_2000", |b| {
        b.iter(|| {
            let html = render_table(black_box(&catalog), &columns);
            black_box(html.len())
        })
    });

    c.bench_function("filter_2000", |b| {
        b.iter(|| {
            let rows = filter_indices(black_box(&catalog), black_box("sample19"));
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_catalog);
criterion_main!(benches);
