//! Markdown Rendering
//!
//! Renders the analysis narrative with pulldown-cmark. The text comes from a
//! remote service and ends up in `inner_html`, so:
//! - raw HTML is shown as text, never injected
//! - images are reduced to their alt text
//! - `javascript:` / `data:` link targets are neutralized

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Parse markdown into sanitized HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser.filter_map(sanitize_event));
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

fn sanitize_event(event: Event<'_>) -> Option<Event<'_>> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Some(Event::Text(raw)),
        // Alt text events between these pass through as plain text
        Event::Start(Tag::Image { .. }) | Event::End(TagEnd::Image) => None,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Some(Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        })),
        other => Some(other),
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let scheme = url.trim_start().to_ascii_lowercase();
    if scheme.starts_with("javascript:") || scheme.starts_with("data:") || scheme.starts_with("vbscript:") {
        CowStr::Borrowed("#")
    } else {
        url
    }
}
