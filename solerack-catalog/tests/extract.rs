use solerack_catalog::extract::{
    ExtractedSize, SizeUnit, clean_model_name, extract_color, extract_gender, extract_size,
    parse_flag, parse_price, parse_size_list, split_image_tokens,
};
use solerack_catalog::types::Gender;

#[test]
fn gender_women_keywords() {
    assert_eq!(extract_gender("Nike Women's Air Max"), Gender::Women);
    assert_eq!(extract_gender("Air Jordan 1 WMNS"), Gender::Women);
    assert_eq!(extract_gender("dunk low wmn pink"), Gender::Women);
    assert_eq!(extract_gender("Lady Runner"), Gender::Women);
}

#[test]
fn gender_men_keywords() {
    assert_eq!(extract_gender("Air Force 1 Men"), Gender::Men);
    assert_eq!(extract_gender("MNS Blazer Mid"), Gender::Men);
    assert_eq!(extract_gender("boys runner"), Gender::Men);
}

#[test]
fn gender_defaults_to_unisex() {
    assert_eq!(extract_gender("Unisex Runner"), Gender::Unisex);
    assert_eq!(extract_gender("Air Max 97"), Gender::Unisex);
    assert_eq!(extract_gender(""), Gender::Unisex);
}

#[test]
fn gender_women_wins_over_men_substring() {
    // "women" contains "men"; the women's rule set runs first.
    assert_eq!(extract_gender("Women's Court Vision"), Gender::Women);
    assert_eq!(extract_gender("woman classic"), Gender::Women);
}

#[test]
fn size_anchored_at_end() {
    assert_eq!(
        extract_size("Air Max 9.5"),
        Some(ExtractedSize {
            value: "9.5".to_string(),
            unit: None,
        })
    );
}

#[test]
fn size_comma_decimal_normalized() {
    let size = extract_size("Dunk Low 42,5").unwrap();
    assert_eq!(size.value, "42.5");
}

#[test]
fn size_with_unit_suffix() {
    let size = extract_size("Air Max 9US").unwrap();
    assert_eq!(size.value, "9");
    assert_eq!(size.unit, Some(SizeUnit::Us));

    let size = extract_size("Gazelle 42.5 EU").unwrap();
    assert_eq!(size.value, "42.5");
    assert_eq!(size.unit, Some(SizeUnit::Eu));
}

#[test]
fn size_falls_back_to_first_match() {
    // No size at the very end, so the first number anywhere is taken.
    let size = extract_size("9.5 Air Max Deluxe").unwrap();
    assert_eq!(size.value, "9.5");
}

#[test]
fn size_absent() {
    assert_eq!(extract_size("Air Force"), None);
    assert_eq!(extract_size(""), None);
}

#[test]
fn model_strips_parenthesized_sku() {
    assert_eq!(clean_model_name("Air Max (ABC123)"), "Air Max");
    assert_eq!(clean_model_name("Dunk Low (DD1391-100) Panda"), "Dunk Low Panda");
}

#[test]
fn model_strips_trailing_size_with_unit() {
    assert_eq!(clean_model_name("Air Max (ABC123) 9US"), "Air Max");
    assert_eq!(clean_model_name("Gazelle 42.5 EU"), "Gazelle");
}

#[test]
fn model_strips_trailing_fractional_size() {
    assert_eq!(clean_model_name("Air Max 9.5"), "Air Max");
}

#[test]
fn model_keeps_bare_trailing_number() {
    // Model numbers are indistinguishable from integer sizes; keep them.
    assert_eq!(clean_model_name("Air Max 97"), "Air Max 97");
    assert_eq!(clean_model_name("Nike Air Force 1"), "Nike Air Force 1");
}

#[test]
fn model_cuts_at_first_comma() {
    assert_eq!(clean_model_name("Air Max, white colorway"), "Air Max");
}

#[test]
fn model_strips_trailing_dashes_and_slashes() {
    assert_eq!(clean_model_name("Blazer Mid -/"), "Blazer Mid");
    assert_eq!(clean_model_name("Blazer Mid --- "), "Blazer Mid");
}

#[test]
fn color_palette_match() {
    assert_eq!(extract_color("Air Max White"), "white");
    assert_eq!(extract_color("dunk NAVY low"), "navy");
    assert_eq!(extract_color("Beige runner"), "beige");
}

#[test]
fn color_defaults_to_other() {
    assert_eq!(extract_color("Air Max 97"), "other");
    assert_eq!(extract_color(""), "other");
}

#[test]
fn price_direct_and_formatted() {
    assert_eq!(parse_price("12990"), 12990.0);
    assert_eq!(parse_price("12990.5"), 12990.5);
    assert_eq!(parse_price("12 000,50"), 12000.5);
    assert_eq!(parse_price("45 000 ₸"), 45000.0);
}

#[test]
fn price_fallback_to_zero() {
    assert_eq!(parse_price(""), 0.0);
    assert_eq!(parse_price("abc"), 0.0);
    assert_eq!(parse_price("  "), 0.0);
}

#[test]
fn flags_truthy_falsy_and_default() {
    assert!(parse_flag("yes", false));
    assert!(parse_flag("TRUE", false));
    assert!(parse_flag("да", false));
    assert!(!parse_flag("no", true));
    assert!(!parse_flag("нет", true));
    assert!(parse_flag("", true));
    assert!(!parse_flag("", false));
    assert!(parse_flag("maybe", true));
}

#[test]
fn size_list_mixed_separators() {
    assert_eq!(parse_size_list("41; 42 / 42,5 43"), vec!["41", "42", "42.5", "43"]);
}

#[test]
fn size_list_dedupes_and_sorts() {
    assert_eq!(parse_size_list("43, 41, 43, 42"), vec!["41", "42", "43"]);
}

#[test]
fn size_list_empty_cell() {
    assert!(parse_size_list("").is_empty());
    assert!(parse_size_list("  ;  ").is_empty());
}

#[test]
fn image_tokens_split_and_ordered() {
    assert_eq!(
        split_image_tokens("100001 100002, 100003;100004"),
        vec!["100001", "100002", "100003", "100004"]
    );
}

#[test]
fn image_tokens_empty_cell() {
    assert!(split_image_tokens("").is_empty());
    assert!(split_image_tokens("  , ").is_empty());
}
