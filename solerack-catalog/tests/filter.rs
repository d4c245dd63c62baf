use solerack_catalog::filter::{VariantFilter, filter_variants};
use solerack_catalog::types::{Gender, Variant};

fn variant(brand: &str, model: &str, color: &str, gender: Gender, sizes_us: &[&str]) -> Variant {
    Variant {
        brand: brand.to_string(),
        model_clean: model.to_string(),
        color: color.to_string(),
        gender,
        sizes_us: sizes_us.iter().map(|s| s.to_string()).collect(),
        sizes_eu: Vec::new(),
        ..Variant::default()
    }
}

fn sample() -> Vec<Variant> {
    vec![
        variant("Nike", "Air Max 97", "white", Gender::Men, &["9", "9.5"]),
        variant("Nike", "Dunk Low", "black", Gender::Women, &["7"]),
        variant("Adidas", "Gazelle", "navy", Gender::Unisex, &["8.5"]),
        variant("Nike", "Air Max 97", "black", Gender::Men, &["10"]),
    ]
}

#[test]
fn empty_filter_passes_everything_in_order() {
    let variants = sample();
    let filter = VariantFilter::default();
    assert!(filter.is_empty());
    let out = filter_variants(&variants, &filter);
    assert_eq!(out.len(), 4);
    assert_eq!(out[0].model_clean, "Air Max 97");
    assert_eq!(out[3].color, "black");
}

#[test]
fn brand_exact_match() {
    let variants = sample();
    let filter = VariantFilter {
        brand: Some("Nike".to_string()),
        ..VariantFilter::default()
    };
    assert_eq!(filter_variants(&variants, &filter).len(), 3);
}

#[test]
fn criteria_are_anded() {
    let variants = sample();
    let filter = VariantFilter {
        brand: Some("Nike".to_string()),
        color: Some("black".to_string()),
        gender: Some(Gender::Men),
        ..VariantFilter::default()
    };
    let out = filter_variants(&variants, &filter);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].model_clean, "Air Max 97");
    assert_eq!(out[0].color, "black");
}

#[test]
fn size_matches_either_unit() {
    let mut variants = sample();
    variants[1].sizes_eu = vec!["38".to_string()];

    let filter = VariantFilter {
        size: Some("38".to_string()),
        ..VariantFilter::default()
    };
    let out = filter_variants(&variants, &filter);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].model_clean, "Dunk Low");

    let filter = VariantFilter {
        size: Some("9.5".to_string()),
        ..VariantFilter::default()
    };
    assert_eq!(filter_variants(&variants, &filter).len(), 1);
}

#[test]
fn text_search_is_case_insensitive_over_brand_model_color() {
    let variants = sample();
    let filter = VariantFilter {
        text: Some("gazelle".to_string()),
        ..VariantFilter::default()
    };
    assert_eq!(filter_variants(&variants, &filter).len(), 1);

    let filter = VariantFilter {
        text: Some("NIKE AIR".to_string()),
        ..VariantFilter::default()
    };
    assert_eq!(filter_variants(&variants, &filter).len(), 2);
}

#[test]
fn filter_preserves_input_order() {
    let variants = sample();
    let filter = VariantFilter {
        brand: Some("Nike".to_string()),
        ..VariantFilter::default()
    };
    let out = filter_variants(&variants, &filter);
    let colors: Vec<&str> = out.iter().map(|v| v.color.as_str()).collect();
    assert_eq!(colors, vec!["white", "black", "black"]);
}

#[test]
fn filter_deserializes_from_shell_payload() {
    let filter: VariantFilter =
        serde_json::from_str(r#"{"brand":"Nike","gender":"women"}"#).unwrap();
    assert_eq!(filter.brand.as_deref(), Some("Nike"));
    assert_eq!(filter.gender, Some(Gender::Women));
    assert!(filter.size.is_none());
}
