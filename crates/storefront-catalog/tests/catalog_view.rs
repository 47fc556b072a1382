//! Properties of the derived catalog view, checked over the sample catalog
//! and a generated product list with many price ties.

use storefront_catalog::prelude::*;

fn usd(cents: i64) -> Money {
    Money::new(cents, Currency::USD)
}

/// Products with repeating prices and tags so ties and mixed case show up.
fn generated() -> Vec<Product> {
    let tags = ["Home", "audio", "SPORTS", "Fashion"];
    let words = ["Lamp", "Speaker", "Ball", "Jacket", "Mug", "Radio"];
    (0..36)
        .map(|i| {
            let base = 1_000 + (i % 5) * 250;
            let mut p = Product::new(
                format!("p{i}"),
                format!("{} {}", words[i as usize % words.len()], i),
                usd(base),
            )
            .with_tags([tags[i as usize % tags.len()], tags[(i as usize + 1) % tags.len()]]);
            if i % 3 == 0 {
                p = p.with_discounted_price(usd(base - 250));
            }
            p
        })
        .collect()
}

fn criteria_grid() -> Vec<FilterCriteria> {
    let mut out = vec![FilterCriteria::new()];
    for category in ["home", "Audio", "sports", "nothing"] {
        out.push(FilterCriteria::new().with_category(category));
        for search in ["lamp", "RA", "zzz", " ", "lamp "] {
            out.push(FilterCriteria::new().with_category(category).with_search(search));
        }
    }
    for search in ["speaker", "1", "MUG"] {
        out.push(FilterCriteria::new().with_search(search));
    }
    out
}

fn inputs() -> Vec<Vec<Product>> {
    vec![Catalog::sample().into_products(), generated(), Vec::new()]
}

#[test]
fn category_results_carry_the_tag() {
    for products in inputs() {
        for criteria in criteria_grid() {
            let Some(category) = criteria.category() else { continue };
            for p in apply_filters(&products, &criteria) {
                assert!(p.tags.iter().any(|t| t.eq_ignore_ascii_case(category)));
            }
        }
    }
}

#[test]
fn search_results_contain_the_text() {
    for products in inputs() {
        for criteria in criteria_grid() {
            let Some(search) = criteria.search.as_deref().filter(|s| !s.is_empty()) else {
                continue;
            };
            for p in apply_filters(&products, &criteria) {
                assert!(
                    p.name.to_lowercase().contains(&search.to_lowercase()),
                    "{:?} does not contain {:?}",
                    p.name,
                    search
                );
            }
        }
    }
}

#[test]
fn filter_keeps_every_match_in_order() {
    for products in inputs() {
        for criteria in criteria_grid() {
            let expected: Vec<Product> = products
                .iter()
                .filter(|p| criteria.matches(p))
                .cloned()
                .collect();
            assert_eq!(apply_filters(&products, &criteria), expected);
        }
    }
}

#[test]
fn empty_criteria_is_identity() {
    for products in inputs() {
        assert_eq!(apply_filters(&products, &FilterCriteria::new()), products);
    }
}

#[test]
fn price_sorts_are_monotonic_and_stable() {
    for products in inputs() {
        let position = |p: &Product| products.iter().position(|q| q.id == p.id).unwrap();

        let asc = apply_sort(&products, SortKey::PriceAsc);
        for w in asc.windows(2) {
            let (a, b) = (w[0].effective_price(), w[1].effective_price());
            assert!(a.amount_cents <= b.amount_cents);
            if a == b {
                assert!(position(&w[0]) < position(&w[1]));
            }
        }

        let desc = apply_sort(&products, SortKey::PriceDesc);
        for w in desc.windows(2) {
            let (a, b) = (w[0].effective_price(), w[1].effective_price());
            assert!(a.amount_cents >= b.amount_cents);
            if a == b {
                assert!(position(&w[0]) < position(&w[1]));
            }
        }

        assert_eq!(asc.len(), products.len());
        assert_eq!(desc.len(), products.len());
    }
}

#[test]
fn derive_view_is_idempotent() {
    for products in inputs() {
        for criteria in criteria_grid() {
            for key in SortKey::ALL {
                let once = derive_view(&products, &criteria, key);
                let twice = derive_view(&once, &criteria, key);
                assert_eq!(once, twice);
            }
        }
    }
}

#[test]
fn alpha_beta_example() {
    let products = vec![
        Product::new("alpha", "Alpha", usd(1000)).with_tags(["a"]),
        Product::new("beta", "Beta", usd(500))
            .with_discounted_price(usd(400))
            .with_tags(["b"]),
    ];

    let filtered = derive_view(
        &products,
        &FilterCriteria::new().with_category("b"),
        SortKey::Popularity,
    );
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Beta");

    let sorted = derive_view(&products, &FilterCriteria::new(), SortKey::PriceAsc);
    assert_eq!(sorted[0].name, "Beta");
    assert_eq!(sorted[0].effective_price(), usd(400));
    assert_eq!(sorted[1].name, "Alpha");

    let none = derive_view(
        &products,
        &FilterCriteria::new().with_search("zzz"),
        SortKey::PriceAsc,
    );
    assert!(none.is_empty());
}

#[test]
fn view_pages_cover_the_derived_view() {
    let catalog = Catalog::new(generated()).unwrap();
    let mut view = CatalogView::new(catalog).with_page_size(5);
    view.set_category(Some("home".into()));
    view.set_sort(SortKey::PriceDesc);

    let all = view.displayed();
    let first = view.page(1);
    let total_pages = first.pagination.total_pages;

    let mut stitched = Vec::new();
    for n in 1..=total_pages {
        stitched.extend(view.page(n).items);
    }
    assert_eq!(stitched, all);
}

#[test]
fn search_text_is_not_trimmed() {
    let products = vec![
        Product::new("lamp", "Desk Lamp", usd(4999)),
        Product::new("mug", "Mug", usd(1299)),
    ];

    let trailing = apply_filters(&products, &FilterCriteria::new().with_search("lamp "));
    assert!(trailing.is_empty());

    let space = apply_filters(&products, &FilterCriteria::new().with_search(" "));
    let names: Vec<&str> = space.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Desk Lamp"]);
}
