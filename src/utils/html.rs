/// Utility functions for handling Telegram HTML formatting
///
/// Replies are sent with the HTML parse mode, so any user-supplied text
/// (first names, region names) must be escaped before it is interpolated.
/// Escapes the characters Telegram's HTML parse mode treats as markup
///
/// Only `&`, `<` and `>` need escaping; quotes are left alone since no user
/// text is ever placed inside an attribute.
///
/// # Arguments
/// * `text` - The text to escape
///
/// # Returns
/// A string safe to embed in an HTML-formatted message
///
/// # Example
/// ```
/// use ramadan_schedule_bot::utils::html::escape_html;
///
/// let text = "Ali <b> & co";
/// let escaped = escape_html(text);
/// assert_eq!(escaped, "Ali &lt;b&gt; &amp; co");
/// ```
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Wraps already-escaped text in a bold tag
pub fn bold(text: &str) -> String {
    format!("<b>{text}</b>")
}
