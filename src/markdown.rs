//! Markdown Rendering
//!
//! Converts the long-form description text of the detail pages to HTML
//! with pulldown-cmark. Strikethrough, tables and task lists are
//! enabled; everything else is stock CommonMark.

use pulldown_cmark::{html::push_html, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Parse markdown to an HTML fragment.
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Parse markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}
