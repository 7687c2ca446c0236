//! Product entries: raw wire form and the normalized result model.

use serde::{Deserialize, Deserializer, Serialize};

/// Currency unit attached client-side; the stream does not carry one.
pub const CURRENCY_UNIT: &str = "THB";

/// A product entry exactly as it appears on the wire.
///
/// Every field is defaulted so that one missing field never discards an
/// otherwise valid entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub product_name_en: String,
    #[serde(default)]
    pub product_categories: String,
    #[serde(default)]
    pub brand: String,
    /// Stringified list of image URLs using single-quote delimiters.
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub short_description_en: String,
    #[serde(default)]
    pub sale_price: f64,
    /// Relevance score; the backend stringifies it, so accept both a JSON
    /// number and a stringified number.
    #[serde(default, deserialize_with = "score_from_any")]
    pub score: Option<f64>,
}

fn score_from_any<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.parse().ok(),
        _ => None,
    })
}

/// One matched product, normalized for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductResult {
    pub id: String,
    pub name: String,
    pub category: String,
    pub brand: String,
    /// First entry of the decoded image list, or empty when absent.
    pub image_url: String,
    /// Rich-text description; must be sanitized before structural rendering.
    pub description: String,
    /// Plain English description variant.
    pub description_en: String,
    pub price: f64,
    pub price_unit: &'static str,
    pub score: Option<f64>,
}

impl ProductResult {
    /// Normalize a wire product.
    pub fn from_raw(raw: RawProduct) -> Self {
        Self {
            id: raw.product_id,
            name: raw.product_name_en,
            category: raw.product_categories,
            brand: raw.brand,
            image_url: first_image_link(&raw.image_link),
            description: raw.short_description,
            description_en: raw.short_description_en,
            price: raw.sale_price,
            price_unit: CURRENCY_UNIT,
            score: raw.score,
        }
    }
}

/// Decode the first entry of a stringified image list.
///
/// The wire encodes the list with single quotes as the string delimiter
/// (`"['http://a','http://b']"`), so quotes are normalized before the
/// structural decode. A decode failure on this field is treated as "image
/// absent" rather than an error.
pub fn first_image_link(encoded: &str) -> String {
    if encoded.is_empty() {
        return String::new();
    }
    let normalized = encoded.replace('\'', "\"");
    match serde_json::from_str::<Vec<String>>(&normalized) {
        Ok(links) => links.into_iter().next().unwrap_or_default(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_image_link_takes_head() {
        assert_eq!(
            first_image_link("['http://a','http://b']"),
            "http://a".to_string()
        );
    }

    #[test]
    fn test_first_image_link_empty_or_absent() {
        assert_eq!(first_image_link(""), "");
        assert_eq!(first_image_link("[]"), "");
    }

    #[test]
    fn test_first_image_link_malformed_treated_as_absent() {
        assert_eq!(first_image_link("not a list"), "");
    }

    #[test]
    fn test_score_accepts_number_and_string() {
        let n: RawProduct = serde_json::from_str(r#"{"score": 0.87}"#).unwrap();
        assert_eq!(n.score, Some(0.87));

        let s: RawProduct = serde_json::from_str(r#"{"score": "0.87"}"#).unwrap();
        assert_eq!(s.score, Some(0.87));

        let missing: RawProduct = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.score, None);
    }

    #[test]
    fn test_from_raw_normalizes() {
        let raw: RawProduct = serde_json::from_str(
            r#"{
                "product_id": "1",
                "product_name_en": "Shoe A",
                "product_categories": "shoes",
                "brand": "Nike",
                "image_link": "['http://img/a.jpg']",
                "short_description": "<b>Fast</b>",
                "short_description_en": "Fast",
                "sale_price": 1200,
                "score": "0.91"
            }"#,
        )
        .unwrap();

        let product = ProductResult::from_raw(raw);
        assert_eq!(product.id, "1");
        assert_eq!(product.name, "Shoe A");
        assert_eq!(product.image_url, "http://img/a.jpg");
        assert_eq!(product.price, 1200.0);
        assert_eq!(product.price_unit, "THB");
        assert_eq!(product.score, Some(0.91));
    }

    #[test]
    fn test_missing_fields_do_not_discard_entry() {
        let raw: RawProduct = serde_json::from_str(r#"{"product_id": "2"}"#).unwrap();
        let product = ProductResult::from_raw(raw);
        assert_eq!(product.id, "2");
        assert_eq!(product.image_url, "");
        assert_eq!(product.price, 0.0);
    }
}
