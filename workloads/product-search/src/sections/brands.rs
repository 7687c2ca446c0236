//! Brand facet section.

use shoplens_core::sanitize::html_escape;
use shoplens_state::SearchProjection;

use super::urlencoding_encode;

/// Render the brand facet chips.
///
/// Each chip re-enters the search with the interpreted category as the
/// query text and the chip's brand as the filter, matching the projection's
/// `brand_search` semantics expressed as a link.
pub fn render_brands(projection: &SearchProjection) -> String {
    if projection.brands().is_empty() {
        return String::new();
    }

    let chips: String = projection
        .brands()
        .iter()
        .map(|brand| {
            let follow_up = projection.brand_search(brand.clone());
            format!(
                r#"<a class="chip" href="/search?q={}&brand={}">{}</a>"#,
                urlencoding_encode(&follow_up.query),
                urlencoding_encode(follow_up.brand.as_deref().unwrap_or("")),
                html_escape(brand)
            )
        })
        .collect();

    format!(
        r#"<section class="brand-facets" data-section="brands">
    Explore brands in the category:
    {chips}
</section>"#
    )
}
