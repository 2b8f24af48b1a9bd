//! Server-rendered pages.

pub mod event_form;
pub mod event_list;
pub mod layout;
pub mod registration_form;

pub use event_form::render_event_form;
pub use event_list::render_event_list;
pub use registration_form::render_registration_form;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Escape text for use in element content and quoted attributes
pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Encode an opaque id as a single URL path segment. The result is plain
/// ASCII and safe inside a quoted attribute.
pub fn path_segment(input: &str) -> String {
    utf8_percent_encode(input, NON_ALPHANUMERIC).to_string()
}
