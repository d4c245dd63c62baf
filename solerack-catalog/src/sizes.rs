//! Static US↔EU shoe size conversion at half-size granularity.
//!
//! The table is intentionally small and irregular (EU 41 → US 8, EU 42 →
//! US 8.5); it mirrors the sizing chart the store actually uses rather than
//! any formula. Unknown inputs return `None`; callers leave the field
//! blank, a miss is never an error.

/// (US, EU) size pairs. Both directions are derived from this one table so
/// the mapping stays bijective.
const US_EU_PAIRS: &[(&str, &str)] = &[
    ("6", "39"),
    ("6.5", "39.5"),
    ("7", "40"),
    ("7.5", "40.5"),
    ("8", "41"),
    ("8.5", "42"),
    ("9", "42.5"),
    ("9.5", "43"),
    ("10", "44"),
    ("10.5", "44.5"),
    ("11", "45"),
    ("11.5", "46"),
    ("12", "46.5"),
];

/// Convert a US size to its EU equivalent.
pub fn us_to_eu(us: &str) -> Option<&'static str> {
    US_EU_PAIRS
        .iter()
        .find(|(u, _)| *u == us)
        .map(|(_, e)| *e)
}

/// Convert an EU size to its US equivalent.
pub fn eu_to_us(eu: &str) -> Option<&'static str> {
    US_EU_PAIRS
        .iter()
        .find(|(_, e)| *e == eu)
        .map(|(u, _)| *u)
}

/// Sort size strings numerically ascending and drop adjacent duplicates.
///
/// Non-numeric leftovers sort after every numeric size, alphabetically among
/// themselves, so display order stays stable for imperfect data.
pub fn sort_sizes(sizes: &mut Vec<String>) {
    use std::cmp::Ordering;

    sizes.sort_by(|a, b| match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    });
    sizes.dedup();
}

/// All US sizes in the table, ascending.
pub fn known_us_sizes() -> impl Iterator<Item = &'static str> {
    US_EU_PAIRS.iter().map(|(u, _)| *u)
}

/// All EU sizes in the table, ascending.
pub fn known_eu_sizes() -> impl Iterator<Item = &'static str> {
    US_EU_PAIRS.iter().map(|(_, e)| *e)
}
