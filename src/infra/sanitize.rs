//! Markdown rendering and HTML sanitization for card text.

use pulldown_cmark::{Options, Parser, html};

/// Renders markdown to HTML and strips anything unsafe.
///
/// Enables tables, footnotes, strikethrough and task lists, then runs the
/// result through `ammonia`'s default allow-list. The output depends only on
/// `markdown`, so re-rendering unchanged text always yields the same HTML.
///
/// # Example
///
/// ```
/// use easynote::infra::sanitize;
///
/// let html = sanitize("# Hi <script>alert(1)</script>");
/// assert!(html.contains("<h1>Hi"));
/// assert!(!html.contains("<script>"));
/// ```
pub fn sanitize(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);

    ammonia::clean(&rendered)
}
