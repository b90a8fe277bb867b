//! Benchmarks for page parsing and search highlighting.
//!
//! Run with: cargo bench --bench highlight_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use numerix_site::dom::Document;
use numerix_site::highlight::{find_matches, Highlighter};

fn services_page(sections: usize) -> String {
    let mut html = String::from("<header><nav>Leistungen Kontakt</nav></header><main>");
    for i in 0..sections {
        html.push_str(&format!(
            "<section><h2>Leistung {}</h2>\
             <p>Numerix GmbH begleitet KMU in Z&uuml;rich bei Buchhaltung, Steuern und Lohn.</p>\
             <p>Unsere Treuh&auml;nder erstellen Abschl&uuml;sse und beraten zu <b>Steuern</b>.</p>\
             <script>window.section = {};</script></section>",
            i, i
        ));
    }
    html.push_str("</main>");
    html
}

fn bench_find_matches(c: &mut Criterion) {
    let text = "İstanbul, Zürich und Straße: Numerix berät KMU. ".repeat(64);

    c.bench_function("find_matches_mixed_case", |b| {
        b.iter(|| black_box(find_matches(black_box(&text), black_box("numerix"))))
    });
}

fn bench_parse(c: &mut Criterion) {
    let html = services_page(100);

    c.bench_function("parse_services_page", |b| {
        b.iter(|| black_box(Document::parse_html(black_box(&html))))
    });
}

fn bench_highlight(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight");
    let highlighter = Highlighter::new();

    for &sections in &[10usize, 100, 500] {
        let html = services_page(sections);
        let Ok(doc) = Document::parse_html(&html) else {
            continue;
        };
        let main = doc.find_first_element(doc.root(), "main");

        // Detached nodes stay in the arena, so every iteration starts from a fresh copy
        group.bench_with_input(BenchmarkId::new("steuern", sections), &sections, |b, _| {
            b.iter_batched(
                || doc.clone(),
                |mut doc| black_box(highlighter.highlight(&mut doc, main, "steuern")),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_highlight_then_clear(c: &mut Criterion) {
    let html = services_page(100);
    let Ok(doc) = Document::parse_html(&html) else {
        return;
    };
    let main = doc.find_first_element(doc.root(), "main");
    let highlighter = Highlighter::new();

    c.bench_function("highlight_then_clear", |b| {
        b.iter_batched(
            || doc.clone(),
            |mut doc| {
                let count = highlighter.highlight(&mut doc, main, "z");
                highlighter.clear(&mut doc, main);
                black_box(count)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_find_matches,
    bench_parse,
    bench_highlight,
    bench_highlight_then_clear
);
criterion_main!(benches);
