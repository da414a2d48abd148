//! HTML projection: pure functions from products to markup. Same working
//! set and limit in, same markup out — the build can re-run any page
//! without diffing against previous output.

pub mod card;
pub mod detail;
pub mod format;
pub mod page;
pub mod stars;

/// Minimal HTML escaping for interpolated text and attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
