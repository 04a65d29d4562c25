//! HTML templates for outbound email.
//!
//! Rendering is kept separate from sending so templates can be unit
//! tested without an email client in play.

pub mod order_emails;
pub mod user_emails;

/// Escapes the handful of characters that matter when interpolating
/// user-supplied text into an HTML body.
pub(crate) fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("A & B"), "A &amp; B");
    }

    #[test]
    fn escape_html_passes_plain_text_through() {
        assert_eq!(escape_html("Nimal Perera"), "Nimal Perera");
    }
}
