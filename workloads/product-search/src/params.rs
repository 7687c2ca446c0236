//! Query parameter parsing for the search page.

use shoplens_core::SearchRequest;

/// Build the search request from the URL query string.
///
/// `q` carries the free text, `brand` the optional filter; an empty brand
/// parameter counts as absent.
pub fn request_from_query_string(qs: &str) -> SearchRequest {
    let mut query = String::new();
    let mut brand = None;

    for pair in qs.split('&') {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or("");
        let value = urlencoding_decode(parts.next().unwrap_or(""));
        match key {
            "q" => query = value,
            "brand" if !value.is_empty() => brand = Some(value),
            _ => {}
        }
    }

    let mut request = SearchRequest::new(query);
    if let Some(brand) = brand {
        request = request.with_brand(brand);
    }
    request
}

/// Simple URL decoding.
///
/// Percent-escapes are collected as raw bytes and decoded as UTF-8 at the
/// end, so multi-byte sequences (Thai query text in particular) survive.
fn urlencoding_decode(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                bytes.push(byte);
            }
        } else if c == '+' {
            bytes.push(b' ');
        } else {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}
