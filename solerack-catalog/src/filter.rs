//! Equality/substring filtering over the grouped variant set.
//!
//! This is the query surface the UI shell consumes: a criteria struct with
//! optional fields, all ANDed, applied as a stable filter that preserves
//! catalog order. The struct deserializes directly from the shell's request
//! payloads.

use serde::Deserialize;

use crate::types::{Gender, Variant};

/// Filter criteria. Unset fields are ignored; set fields are ANDed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VariantFilter {
    /// Exact brand match.
    pub brand: Option<String>,
    pub gender: Option<Gender>,
    /// Exact color match.
    pub color: Option<String>,
    /// Size present in either `sizes_us` or `sizes_eu`.
    pub size: Option<String>,
    /// Exact clean-model match.
    pub model_clean: Option<String>,
    /// Case-insensitive substring over brand + model + color.
    pub text: Option<String>,
}

impl VariantFilter {
    /// True when no criterion is set (the filter passes everything).
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.gender.is_none()
            && self.color.is_none()
            && self.size.is_none()
            && self.model_clean.is_none()
            && self.text.is_none()
    }

    /// Evaluate every set criterion against one variant.
    pub fn matches(&self, variant: &Variant) -> bool {
        if let Some(brand) = &self.brand
            && variant.brand != *brand
        {
            return false;
        }
        if let Some(gender) = self.gender
            && variant.gender != gender
        {
            return false;
        }
        if let Some(color) = &self.color
            && variant.color != *color
        {
            return false;
        }
        if let Some(model) = &self.model_clean
            && variant.model_clean != *model
        {
            return false;
        }
        if let Some(size) = &self.size
            && !variant
                .sizes_us
                .iter()
                .chain(variant.sizes_eu.iter())
                .any(|s| s == size)
        {
            return false;
        }
        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            let haystack = format!(
                "{} {} {}",
                variant.brand, variant.model_clean, variant.color
            )
            .to_lowercase();
            if !haystack.contains(&needle) {
                return false;
            }
        }
        true
    }
}

/// Stable filter over a variant slice; output preserves input order.
pub fn filter_variants<'a>(variants: &'a [Variant], filter: &VariantFilter) -> Vec<&'a Variant> {
    variants.iter().filter(|v| filter.matches(v)).collect()
}
