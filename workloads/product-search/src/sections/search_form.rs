//! Search form section.

use shoplens_core::sanitize::html_escape;
use shoplens_core::SearchRequest;

/// Render the search form, pre-filled with the current query text.
pub fn render_search_form(request: &SearchRequest) -> String {
    format!(
        r#"<section class="search-box" data-section="search-form">
    <form action="/search" method="GET" class="search-form">
        <input type="search" id="search" name="q" value="{}" placeholder="Search products..." aria-label="Search" required>
        <button type="submit">Search</button>
    </form>
</section>"#,
        html_escape(&request.query)
    )
}
