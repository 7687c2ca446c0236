//! HTML escaping and rich-text sanitization.
//!
//! Product descriptions arrive as rich text from an external source and are
//! rendered structurally, so they pass through `sanitize_description` first:
//! only a small allowlist of formatting tags survives, with all attributes
//! dropped. Everything else interpolated into HTML goes through
//! `html_escape`.

/// Escape text for interpolation into HTML.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Formatting tags allowed to survive sanitization.
const ALLOWED_TAGS: &[&str] = &[
    "b", "i", "em", "strong", "u", "p", "br", "ul", "ol", "li", "span",
];

/// Sanitize a rich-text description for structural rendering.
///
/// Allowlisted tags are re-emitted bare (attributes dropped, which removes
/// event handlers); disallowed tags are stripped; text content is escaped.
pub fn sanitize_description(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        out.push_str(&html_escape(&rest[..start]));
        let tail = &rest[start + 1..];
        match tail.find('>') {
            Some(end) => {
                emit_tag(&tail[..end], &mut out);
                rest = &tail[end + 1..];
            }
            None => {
                // Stray '<' with no closing '>': escape the remainder.
                out.push_str(&html_escape(&rest[start..]));
                return out;
            }
        }
    }

    out.push_str(&html_escape(rest));
    out
}

fn emit_tag(raw: &str, out: &mut String) {
    let body = raw.trim();
    let (closing, body) = match body.strip_prefix('/') {
        Some(stripped) => (true, stripped),
        None => (false, body),
    };
    let name: String = body
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    if ALLOWED_TAGS.contains(&name.as_str()) {
        if closing {
            out.push_str("</");
        } else {
            out.push('<');
        }
        out.push_str(&name);
        out.push('>');
    }
}
