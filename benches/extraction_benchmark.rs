//! Candidate location and fragment extraction on a synthetic category page

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scraper::Html;

use smartphone_scraper_lib::infrastructure::parsing::{
    CandidateLocator, ListingParser, ParseContext, extract_model,
};
use smartphone_scraper_lib::domain::Brand;

fn synthetic_page(count: usize) -> String {
    let items: String = (0..count)
        .map(|i| {
            format!(
                r#"<article class="Article-item">
                    <a href="/a{i}/Samsung-Galaxy"><img data-src="/img/{i}.jpg" src="/ph.gif"></a>
                    <h3>Samsung Galaxy S{i} Ultra (Reconditionné) 256 Go Noir</h3>
                    <div class="f-priceBox-price">1 0{i},00 €</div>
                </article>"#
            )
        })
        .collect();
    format!("<html><body><nav class=\"menu\"></nav>{items}</body></html>")
}

fn bench_extraction(c: &mut Criterion) {
    let page = synthetic_page(40);
    let locator = CandidateLocator::new().expect("default patterns compile");
    let parser = ListingParser::new().expect("default selectors compile");
    let context = ParseContext::new("https://www.fnac.com/bench");

    c.bench_function("locate_candidates_40", |b| {
        b.iter(|| {
            let html = Html::parse_document(black_box(&page));
            locator.locate(&html).len()
        })
    });

    let fragments = locator.locate(&Html::parse_document(&page));
    c.bench_function("parse_candidates_40", |b| {
        b.iter(|| {
            fragments
                .iter()
                .filter_map(|fragment| parser.parse_candidate(black_box(fragment), &context).ok())
                .count()
        })
    });

    c.bench_function("extract_model", |b| {
        b.iter(|| {
            extract_model(
                black_box("Samsung Galaxy S24 Ultra (Reconditionné) 256 Go Titanium Gray"),
                Brand::Samsung,
            )
        })
    });
}

criterion_group!(benches, bench_extraction);
criterion_main!(benches);
