//! Message Markdown
//!
//! Message bodies are rendered with pulldown-cmark and inserted as inner HTML.
//! The renderer never passes author HTML through:
//! - raw HTML blocks and inline tags are emitted as escaped text
//! - images become plain links (no remote loads inside a thread)
//! - `javascript:` and `data:` link targets are replaced with `#`

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

const BLOCKED_SCHEMES: &[&str] = &["javascript:", "data:", "vbscript:"];

fn options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Render a message body to HTML
pub fn render_message(text: &str) -> String {
    let events = sanitize_events(Parser::new_ext(text, options()));
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Render for inline use; a single paragraph loses its `<p>` wrapper
pub fn render_inline(text: &str) -> String {
    let html = render_message(text);
    let trimmed = html.trim();
    if trimmed.matches("<p>").count() != 1 {
        return trimmed.to_string();
    }
    trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let lower = url.trim_start().to_ascii_lowercase();
    if BLOCKED_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

fn sanitize_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    parser
        .map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            Event::Start(Tag::Link { link_type, dest_url, title, id })
            | Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
                Event::Start(Tag::Link { link_type, dest_url: safe_url(dest_url), title, id })
            }
            Event::End(TagEnd::Image) => Event::End(TagEnd::Link),
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_emphasis() {
        assert_eq!(render_inline("**better lead capture**"), "<strong>better lead capture</strong>");
        assert_eq!(render_inline("~~old~~ new"), "<del>old</del> new");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let out = render_inline("hello <b onclick=\"x()\">there</b>");
        assert!(!out.contains("<b "));
        assert!(out.contains("&lt;b"));

        let out = render_message("<script>alert(1)</script>");
        assert!(!out.contains("<script"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_images_become_links() {
        let out = render_inline("![logo](https://example.com/logo.png)");
        assert_eq!(out, "<a href=\"https://example.com/logo.png\">logo</a>");
    }

    #[test]
    fn test_script_links_are_neutralized() {
        let out = render_inline("[click](javascript:alert(1))");
        assert!(!out.contains("javascript"));
        assert!(out.contains("href=\"#\""));
        let out = render_inline("[docs](https://example.com)");
        assert!(out.contains("href=\"https://example.com\""));
    }

    #[test]
    fn test_multiple_paragraphs_keep_wrappers() {
        let out = render_inline("first\n\nsecond");
        assert_eq!(out, "<p>first</p>\n<p>second</p>");
    }
}
