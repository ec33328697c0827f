use super::*;

fn titles(cards: &[&CategoryCard]) -> Vec<&'static str> {
    cards.iter().map(|c| c.title).collect()
}

#[test]
fn slugs_round_trip_case_insensitively() {
    assert_eq!(Category::from_slug("SPORTS"), Some(Category::Sports));
    assert_eq!(Category::from_slug("vinyl"), None);
    assert_eq!(Category::Heterogeneous.href(), "/products/heterogeneous");
}

#[test]
fn all_tab_without_search_shows_every_card() {
    assert_eq!(filter_cards(None, "").len(), 3);
}

#[test]
fn tab_limits_to_category() {
    assert_eq!(titles(&filter_cards(Some(Category::Sports), "")), vec!["Sports Flooring"]);
}

#[test]
fn search_is_case_insensitive_and_combines_with_tab() {
    assert_eq!(titles(&filter_cards(None, "HETERO")), vec!["Heterogeneous Flooring"]);
    assert!(filter_cards(Some(Category::Homogeneous), "sports").is_empty());
    assert_eq!(filter_cards(None, "geneous").len(), 2);
}

#[test]
fn product_pages_are_complete() {
    for category in Category::ALL {
        let page = product_page(category);
        assert_eq!(page.category, category);
        assert!(!page.features.is_empty());
        for row in page.specs.rows {
            assert_eq!(row.len(), page.specs.headers.len());
        }
    }
    assert_eq!(product_page(Category::Homogeneous).default_swatch(), Some("FE-25024"));
    assert_eq!(product_page(Category::Sports).default_swatch(), None);
}
