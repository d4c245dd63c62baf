//! Attribute extraction from raw spreadsheet cell text.
//!
//! Model cells in the source workbook are free text with embedded size,
//! gender, and color tokens ("Nike Air Max (DH1234-100) Wmns 9.5US"), price
//! cells mix numbers with currency formatting, and flag cells hold loose
//! yes/no text. Everything here is a pure function over `&str`; the keyword
//! tables are data so each rule is independently testable.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Gender;

/// Gender keyword rules, evaluated in order with first match winning.
///
/// The women's set is checked first: "women" contains "men" as a substring,
/// so the reverse order would misclassify every women's model.
const GENDER_RULES: &[(&[&str], Gender)] = &[
    (
        &["women", "woman", "wmn", "wmns", "lady", "girl"],
        Gender::Women,
    ),
    (&["men", "man", "mns", "male", "boy"], Gender::Men),
];

/// Closed color palette, checked in order. Anything else is [`COLOR_OTHER`].
const COLOR_PALETTE: &[&str] = &[
    "white", "black", "blue", "red", "green", "pink", "gray", "brown", "beige", "navy",
];

/// Fallback color for models matching nothing in the palette.
pub const COLOR_OTHER: &str = "other";

// A size is a 1-2 digit number with an optional .5/,5 fraction and an
// optional US/EU unit suffix. The end-anchored form is preferred per the
// "...Model 9.5" convention.
static SIZE_AT_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{1,2}(?:[.,]\d)?)\s*(us|eu)?\s*$").unwrap());
static SIZE_ANYWHERE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{1,2}(?:[.,]\d)?)\s*(us|eu)?").unwrap());
static SIZE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}(?:[.,]\d)?").unwrap());
static PAREN_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());
// "42,5" inside a size list is a decimal comma, not a separator.
static DECIMAL_COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d),(\d)\b").unwrap());
// Only a trailing size token that carries a unit suffix or a decimal
// fraction is stripped from model names; a bare trailing integer stays,
// because "Air Max 97" is a model number, not a size.
static TRAILING_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s\d{1,2}(?:[.,]\d)?\s*(?:us|eu)\s*$|\s\d{1,2}[.,]\d\s*$").unwrap()
});

// ── Gender / color ──────────────────────────────────────────────────────────

/// Infer a gender from free text via the ordered keyword rules.
pub fn extract_gender(text: &str) -> Gender {
    let lower = text.to_lowercase();
    for (keywords, gender) in GENDER_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *gender;
        }
    }
    Gender::Unisex
}

/// Match free text against the fixed color palette; `"other"` on no match.
pub fn extract_color(text: &str) -> String {
    let lower = text.to_lowercase();
    COLOR_PALETTE
        .iter()
        .find(|&&color| lower.contains(color))
        .map_or_else(|| COLOR_OTHER.to_string(), |&color| color.to_string())
}

// ── Sizes ───────────────────────────────────────────────────────────────────

/// Unit of an extracted shoe size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    Us,
    Eu,
}

/// A size token pulled out of free text, with its unit when one was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSize {
    /// Normalized number, comma decimal separator replaced with a dot.
    pub value: String,
    pub unit: Option<SizeUnit>,
}

/// Find a size token in free text, preferring a match anchored at the end
/// of the string and falling back to the first number found anywhere.
pub fn extract_size(text: &str) -> Option<ExtractedSize> {
    let caps = SIZE_AT_END
        .captures(text)
        .or_else(|| SIZE_ANYWHERE.captures(text))?;
    let value = caps.get(1)?.as_str().replace(',', ".");
    let unit = caps.get(2).map(|m| {
        if m.as_str().eq_ignore_ascii_case("us") {
            SizeUnit::Us
        } else {
            SizeUnit::Eu
        }
    });
    Some(ExtractedSize { value, unit })
}

/// Parse a delimited multi-size cell (`"41; 42 / 42,5"`) into unique,
/// numerically sorted size strings.
pub fn parse_size_list(raw: &str) -> Vec<String> {
    let normalized = DECIMAL_COMMA.replace_all(raw, "$1.$2");
    let mut sizes: Vec<String> = Vec::new();
    for token in normalized.split([';', ',', '/', ' ', '\t']) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Some(m) = SIZE_NUMBER.find(token) {
            let value = m.as_str().to_string();
            if !sizes.contains(&value) {
                sizes.push(value);
            }
        }
    }
    crate::sizes::sort_sizes(&mut sizes);
    sizes
}

// ── Model / price / flags ───────────────────────────────────────────────────

/// Strip SKU noise from a raw model cell: parenthesized spans, anything
/// after the first comma, trailing dash/slash runs, and a trailing size
/// token when it is unambiguously a size.
pub fn clean_model_name(text: &str) -> String {
    let no_parens = PAREN_SPAN.replace_all(text, " ");
    let before_comma = match no_parens.find(',') {
        Some(idx) => &no_parens[..idx],
        None => no_parens.as_ref(),
    };
    let no_size = TRAILING_SIZE.replace(before_comma, "");
    let trimmed = no_size
        .trim()
        .trim_end_matches(|c: char| c == '-' || c == '/' || c.is_whitespace());
    // Collapse runs of whitespace left behind by the removed spans.
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a price from numeric or currency-formatted text.
///
/// Falls back to stripping every character that is not a digit, dot, or
/// comma and converting the comma decimal separator. Total failure yields
/// `0.0`; this never errors.
pub fn parse_price(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return value;
    }
    let filtered: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    filtered.replace(',', ".").parse::<f64>().unwrap_or(0.0)
}

/// Interpret a loose yes/no cell. Empty or unrecognized text yields the
/// caller's default (the stock column defaults to "in stock").
pub fn parse_flag(raw: &str, default: bool) -> bool {
    match raw.trim().to_lowercase().as_str() {
        "yes" | "true" | "1" | "y" | "да" => true,
        "no" | "false" | "0" | "n" | "нет" => false,
        _ => default,
    }
}

/// Split an image cell into ordered basename tokens.
pub fn split_image_tokens(raw: &str) -> Vec<String> {
    raw.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
