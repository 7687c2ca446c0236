//! Product results section.

use shoplens_core::sanitize::{html_escape, sanitize_description};
use shoplens_core::ProductResult;

/// Render the product list in the order received.
pub fn render_products(products: &[ProductResult]) -> String {
    let cards: String = products.iter().map(render_product_card).collect();
    format!(
        r#"<section class="search-results" data-section="results">
    {cards}
</section>"#
    )
}

fn render_product_card(product: &ProductResult) -> String {
    let image = if product.image_url.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="product-image"><img src="{}" alt="{}" loading="lazy"></div>"#,
            html_escape(&product.image_url),
            html_escape(&product.name)
        )
    };

    let score = product
        .score
        .map(|s| format!(r#"<div class="product-score">Similarity score: {:.2}</div>"#, s))
        .unwrap_or_default();

    format!(
        r#"<article class="product-card" data-product-id="{}">
    {image}
    <div class="product-info">
        <h2 class="product-title">{}</h2>
        <div class="product-meta">Brand: {} / {} {}</div>
        <div class="product-description">{}</div>
        <div class="product-category">Category: {}</div>
        {score}
    </div>
</article>"#,
        html_escape(&product.id),
        html_escape(&product.name),
        html_escape(&product.brand),
        product.price,
        product.price_unit,
        sanitize_description(&product.description),
        html_escape(&product.category)
    )
}

/// Render the explicit empty state shown when a query was interpreted but
/// the stream delivered no products.
pub fn render_no_results() -> String {
    r#"<section class="no-results" data-section="results">No products found.</section>"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplens_core::{ProductResult, RawProduct};

    fn product() -> ProductResult {
        ProductResult::from_raw(RawProduct {
            product_id: "1".to_string(),
            product_name_en: "Shoe A".to_string(),
            product_categories: "shoes".to_string(),
            brand: "Nike".to_string(),
            image_link: "['http://img/a.jpg']".to_string(),
            short_description: "<b>Fast</b><script>x()</script>".to_string(),
            sale_price: 1200.0,
            ..Default::default()
        })
    }

    #[test]
    fn test_card_shows_price_with_currency_unit() {
        let html = render_products(&[product()]);
        assert!(html.contains("Shoe A"));
        assert!(html.contains("Brand: Nike / 1200 THB"));
    }

    #[test]
    fn test_description_sanitized_not_raw() {
        let html = render_products(&[product()]);
        assert!(html.contains("<b>Fast</b>"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_missing_image_omits_img_tag() {
        let mut p = product();
        p.image_url = String::new();
        let html = render_products(&[p]);
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_no_results_section() {
        assert!(render_no_results().contains("No products found."));
    }
}
