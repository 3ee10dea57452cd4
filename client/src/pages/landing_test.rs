use super::*;

#[test]
fn format_price_zero_is_free() {
    assert_eq!(format_price(0), "Free");
}

#[test]
fn format_price_whole_amount_drops_cents() {
    assert_eq!(format_price(1900), "$19");
}

#[test]
fn format_price_keeps_two_digit_cents() {
    assert_eq!(format_price(4950), "$49.50");
    assert_eq!(format_price(5), "$0.05");
}

#[test]
fn exactly_one_tier_is_highlighted() {
    let highlighted: Vec<_> = PRICING_TIERS.iter().filter(|t| t.highlighted).map(|t| t.name).collect();
    assert_eq!(highlighted, vec!["Pro"]);
    assert_eq!(tier_class(&PRICING_TIERS[1]), "pricing-card pricing-card--highlighted");
}

#[test]
fn header_sections_exist_on_page() {
    use crate::components::site_header::NAV_SECTIONS;
    let page_ids = ["home", "features", "pricing", "contact"];
    for (id, _) in NAV_SECTIONS {
        assert!(page_ids.contains(&id), "{id}");
    }
}
