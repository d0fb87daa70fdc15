//! Benchmarks for style resolution and warning classification.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stylenorm::{DiagnosticClassifier, ParagraphElement, StyleMappingTable, StyleResolver};

/// Creates a mix of renderer warnings like a large, messy document produces.
fn create_warnings(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 5 {
            0 => format!(
                "Unrecognised paragraph style: Основной текст ({}) (Style ID: {})",
                i, i
            ),
            1 => format!(
                "Paragraph style with ID Style{} was referenced but not defined in the document",
                i
            ),
            2 => "An unrecognised element was ignored: w:tblPrEx".to_string(),
            3 => "An unrecognised element was ignored: v:shape".to_string(),
            _ => "Image of type image/x-emf is unlikely to display in web browsers".to_string(),
        })
        .collect()
}

/// Creates paragraphs hitting every resolution rule.
fn create_paragraphs(count: usize) -> Vec<ParagraphElement> {
    (0..count)
        .map(|i| match i % 4 {
            0 => ParagraphElement::new().with_style_id("11"),
            1 => ParagraphElement::styled("Style18", "None"),
            2 => ParagraphElement::new(),
            _ => ParagraphElement::styled("Heading3", "Заголовок №3"),
        })
        .collect()
}

/// Benchmark warning classification at various sizes.
fn bench_classification(c: &mut Criterion) {
    let classifier = DiagnosticClassifier::new();
    let mut group = c.benchmark_group("classification");

    for count in [10, 100, 1000].iter() {
        let warnings = create_warnings(*count);

        group.bench_function(format!("{}_warnings", count), |b| {
            b.iter(|| {
                let categorized = classifier.classify(black_box(&warnings));
                classifier.summarize(&categorized)
            });
        });
    }

    group.finish();
}

/// Benchmark the per-paragraph transform hook.
fn bench_resolution(c: &mut Criterion) {
    let resolver = StyleResolver::new();
    let paragraphs = create_paragraphs(1000);

    c.bench_function("resolve_1000_paragraphs", |b| {
        b.iter(|| {
            black_box(&paragraphs)
                .iter()
                .map(|p| resolver.resolve(p))
                .count()
        });
    });
}

/// Benchmark building the style map and its textual form.
fn bench_style_map(c: &mut Criterion) {
    c.bench_function("style_map_build", |b| {
        b.iter(|| StyleMappingTable::build().to_style_map());
    });

    let table = StyleMappingTable::build();
    c.bench_function("style_map_lookup", |b| {
        b.iter(|| table.lookup(black_box("Normal")));
    });
}

criterion_group!(
    benches,
    bench_classification,
    bench_resolution,
    bench_style_map,
);
criterion_main!(benches);
