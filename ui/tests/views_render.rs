//! Server-side renders the grid and both views against a catalog supplied
//! through context.

use dioxus::prelude::*;
use ui::components::{ShoeGrid, ShoeGridProps};
use ui::core::catalog::{Catalog, CatalogState};
use ui::views::{ShoeDetail, ShoeDetailProps, ShoeIndex};

const ONE_SHOE: &str = r#"[
    { "slug": "metcon-6", "name": "Metcon 6", "imageSrc": "/shoes/metcon-6.svg",
      "price": 13000, "releaseDate": "2019-06-01", "numOfColors": 3 }
]"#;

fn english() {
    ui::i18n::init();
    ui::i18n::set_language(ui::i18n::FALLBACK_LANGUAGE).unwrap();
}

fn loaded(raw: &str) -> CatalogState {
    CatalogState {
        catalog: Catalog::from_json(raw).unwrap(),
        error: None,
    }
}

fn failed() -> CatalogState {
    CatalogState {
        catalog: Catalog::default(),
        error: Some("expected value at line 1 column 1".into()),
    }
}

fn render(mut dom: VirtualDom) -> String {
    english();
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn detail(state: CatalogState, slug: &str) -> String {
    let props = ShoeDetailProps::builder().slug(slug.to_string()).build();
    render(VirtualDom::new_with_props(ShoeDetail, props).with_root_context(state))
}

#[test]
fn empty_grid_shows_placeholder() {
    let props = ShoeGridProps::builder().listings(Vec::new()).build();
    let html = render(VirtualDom::new_with_props(ShoeGrid, props));

    assert!(
        html.contains(r#"<p class="shoe-grid__placeholder">No shoes to show yet.</p>"#),
        "{html}"
    );
    assert!(!html.contains("shoe-card"), "{html}");
}

#[test]
fn detail_renders_the_card_for_a_known_slug() {
    let html = detail(loaded(ONE_SHOE), "metcon-6");

    assert!(html.contains(r#"href="/shoe/metcon-6""#), "{html}");
    assert!(html.contains(">Metcon 6<"), "{html}");
    assert!(html.contains(">3 Colors<"), "{html}");
    assert!(html.contains(r#"class="page-detail__back" href="/""#), "{html}");
    assert!(!html.contains("page__message"), "{html}");
}

#[test]
fn detail_reports_an_unknown_slug() {
    let html = detail(loaded(ONE_SHOE), "air-max-90");

    assert!(
        html.contains(r#"<p class="page__message">We couldn&#x27;t find that shoe.</p>"#),
        "{html}"
    );
    assert!(!html.contains("shoe-card"), "{html}");
}

#[test]
fn detail_reports_a_catalog_that_failed_to_load() {
    let html = detail(failed(), "metcon-6");

    assert!(html.contains("We couldn&#x27;t load the catalog."), "{html}");
    assert!(!html.contains("We couldn&#x27;t find that shoe."), "{html}");
}

#[test]
fn index_reports_a_catalog_that_failed_to_load() {
    let html = render(VirtualDom::new(ShoeIndex).with_root_context(failed()));

    assert!(html.contains("page__message--error"), "{html}");
    assert!(html.contains("We couldn&#x27;t load the catalog."), "{html}");
    assert!(!html.contains("shoe-grid"), "{html}");
}

#[test]
fn index_lists_the_provided_catalog() {
    let html = render(VirtualDom::new(ShoeIndex).with_root_context(loaded(ONE_SHOE)));

    assert!(html.contains(">Running<"), "{html}");
    assert!(html.contains(r#"href="/shoe/metcon-6""#), "{html}");
    assert!(!html.contains("page__message"), "{html}");
}
