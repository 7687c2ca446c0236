//! Section renderers for the product search page.

mod brands;
mod query_used;
mod results;
mod search_form;

pub use brands::*;
pub use query_used::*;
pub use results::*;
pub use search_form::*;

/// Simple URL encoding for link building.
pub(crate) fn urlencoding_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push('+'),
            _ => {
                for byte in c.to_string().as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}
