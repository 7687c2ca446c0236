//! Interpreted-query section.

use shoplens_core::sanitize::html_escape;
use shoplens_core::InterpretedQuery;

/// Render what the service understood the search to mean.
pub fn render_query_used(query: &InterpretedQuery) -> String {
    let brand_chip = query
        .brand
        .as_deref()
        .map(|brand| format!(r#"<span class="chip">Brand: {}</span>"#, html_escape(brand)))
        .unwrap_or_default();

    format!(
        r#"<section class="query-used" data-section="query">
    Searching products for:
    <span class="chip">Category: {}</span>
    {brand_chip}
</section>"#,
        html_escape(&query.product_category)
    )
}
