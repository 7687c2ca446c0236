//! HTTP handler: one streaming search per page request.

use futures::StreamExt;
use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use shoplens_core::SearchRequest;
use shoplens_observability::{LogLevel, SearchLogger};
use shoplens_state::SearchProjection;
use shoplens_streaming::{PageHead, PageShell, SectionSink, StreamingSearchClient};

use crate::params::request_from_query_string;
use crate::sections::{
    render_brands, render_no_results, render_products, render_query_used, render_search_form,
};

/// Product search page handler.
#[http_component]
async fn handle_product_search(req: IncomingRequest, response_out: ResponseOutparam) {
    if req.method() != Method::Get {
        let headers = Fields::from_list(&[]).unwrap();
        let response = OutgoingResponse::new(headers);
        response.set_status_code(405).unwrap();
        response_out.set(response);
        return;
    }

    let path_with_query = req.path_with_query().unwrap_or_default();
    let query_string = path_with_query.split('?').nth(1).unwrap_or("");
    let request = request_from_query_string(query_string);

    let header_list: Vec<(String, Vec<u8>)> =
        vec![("content-type".to_owned(), "text/html; charset=utf-8".into())];
    let headers = Fields::from_list(&header_list).unwrap();
    let response = OutgoingResponse::new(headers);
    response.set_status_code(200).unwrap();
    let body = response.take_body();
    response_out.set(response);

    let mut sink = SectionSink::new(body);
    let shell = create_shell(&request);
    if let Err(e) = sink.send_shell(&shell.render_opening()).await {
        eprintln!("Failed to send shell: {}", e);
        return;
    }
    let _ = sink
        .send_section("search-form", &render_search_form(&request))
        .await;

    // Clear state before the first chunk of the new stream can land.
    let mut projection = SearchProjection::new();
    let ticket = projection.begin_search();
    let logger = SearchLogger::new(ticket.sequence()).with_query(request.query.clone());

    // Empty input is a no-op, not an error: render the landing page only.
    if request.is_searchable() {
        let client = StreamingSearchClient::from_variables();
        match client.open(&request).await {
            Ok(Some(mut chunks)) => {
                logger.info("search stream opened");
                while let Some(chunk) = chunks.next().await {
                    let kind = chunk.kind();
                    if !projection.apply_chunk(ticket, chunk) {
                        // Stale chunk from a superseded search.
                        continue;
                    }
                    let html = match kind {
                        "query" => projection
                            .interpreted()
                            .map(render_query_used)
                            .unwrap_or_default(),
                        "brands" => render_brands(&projection),
                        _ => render_products(projection.products()),
                    };
                    let _ = sink.send_section(kind, &html).await;
                }
                if let Some(failure) = chunks.failure() {
                    let detail = failure.to_string();
                    logger.log_with(
                        LogLevel::Error,
                        "search stream aborted",
                        &[("error", detail.as_str())],
                    );
                }
                if chunks.frames_dropped() > 0 {
                    let dropped = chunks.frames_dropped().to_string();
                    logger.log_with(
                        LogLevel::Warn,
                        "undecodable frames dropped",
                        &[("count", dropped.as_str())],
                    );
                }
            }
            Ok(None) => {}
            Err(e) => {
                let detail = e.to_string();
                logger.log_with(
                    LogLevel::Error,
                    "search stream failed to open",
                    &[("error", detail.as_str())],
                );
            }
        }

        if projection.has_no_results() {
            let _ = sink.send_section("no-results", &render_no_results()).await;
        }
    }

    let _ = sink.send_section("closing", &shell.render_closing()).await;
    sink.complete();
}

/// Create the shell for the search page.
fn create_shell(request: &SearchRequest) -> PageShell {
    let title = if request.query.trim().is_empty() {
        "Product Search".to_string()
    } else {
        format!("{} - Product Search", request.query)
    };

    let head = PageHead::new(title)
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_style(SEARCH_STYLES);

    PageShell::new(head)
        .with_body_start("<body>\n<main class=\"search-page\">\n")
        .with_body_end("</main>\n</body>\n</html>")
}

const SEARCH_STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: #f8fafc;
    color: #1e293b;
    line-height: 1.5;
}

.search-page {
    max-width: 860px;
    margin: 0 auto;
    padding: 2rem 1rem;
}

.search-form {
    display: flex;
    margin-bottom: 1rem;
}

.search-form input {
    flex: 1;
    padding: 1rem;
    border: 1px solid #e2e8f0;
    border-radius: 8px 0 0 8px;
    font-size: 0.875rem;
}

.search-form button {
    padding: 0 1.5rem;
    background: #2563eb;
    color: white;
    border: none;
    border-radius: 0 8px 8px 0;
    cursor: pointer;
}

.query-used, .brand-facets {
    padding: 0.5rem;
}

.chip {
    display: inline-block;
    font-size: 0.75rem;
    border-radius: 0.75rem;
    margin-right: 0.5rem;
    padding: 0.5rem;
    background: #f1f5f9;
    box-shadow: 0 1px 2px rgba(0,0,0,0.1);
    color: inherit;
    text-decoration: none;
}

.product-card {
    display: flex;
    border-bottom: 1px solid #e2e8f0;
    padding: 1rem 0;
}

.product-image {
    flex: none;
    width: 12rem;
}

.product-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.product-info {
    flex: auto;
    padding: 0 1.5rem;
}

.product-title {
    font-size: 1.125rem;
    font-weight: 600;
}

.product-meta, .product-category, .product-score {
    font-size: 0.875rem;
}

.product-description {
    font-size: 0.875rem;
    font-weight: 500;
    color: #334155;
    margin: 0.5rem 0;
}

.no-results {
    padding: 1rem 0.5rem;
    color: #64748b;
}
"#;
