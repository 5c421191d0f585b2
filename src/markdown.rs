//! Markdown Rendering
//!
//! Renders content Markdown (the about text, project descriptions) with
//! pulldown-cmark:
//! - Links open in a new browsing context
//! - Images are constrained to their container, alt text dropped
//! - Raw HTML in the source is shown as text, never injected

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

// Characters that would break out of a quoted href/src attribute.
// `#`, `?` and `&` keep their URL meaning.
const URL_ATTR_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Parse markdown with the site's extensions
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
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

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

// State for the event transformer
enum State {
    Normal,
    InImage { dropped_depth: usize },
}

/// Rewrite links, images and raw HTML
fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::Link { dest_url, title, .. }) => {
                    events.push(Event::Html(CowStr::from(external_link_open(&dest_url, &title))));
                }
                Event::End(TagEnd::Link) => {
                    events.push(Event::Html(CowStr::from("</a>")));
                }
                Event::Start(Tag::Image { dest_url, .. }) => {
                    let html = format!(
                        r#"<img src="{}" class="md-image" loading="lazy" />"#,
                        encode_url(&dest_url)
                    );
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::InImage { dropped_depth: 0 };
                }
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
                other => events.push(other),
            },

            State::InImage { ref mut dropped_depth } => match event {
                Event::Start(_) => *dropped_depth += 1,
                Event::End(_) => {
                    if *dropped_depth == 0 {
                        state = State::Normal;
                    } else {
                        *dropped_depth -= 1;
                    }
                }
                _ => {}
            },
        }
    }

    events
}

/// Percent-encode attribute-breaking characters, then escape `&` for HTML
fn encode_url(url: &str) -> String {
    utf8_percent_encode(url, URL_ATTR_ENCODE_SET)
        .to_string()
        .replace('&', "&amp;")
}

fn external_link_open(dest_url: &str, title: &str) -> String {
    let href = encode_url(dest_url);
    let title_attr = if title.is_empty() {
        String::new()
    } else {
        format!(r#" title="{}""#, escape_attr(title))
    };
    format!(
        r#"<a href="{}"{} target="_blank" rel="noopener noreferrer">"#,
        href, title_attr
    )
}

fn escape_attr(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs() {
        let html = parse_markdown("first\n\nsecond");
        assert_eq!(html, "<p>first</p>\n<p>second</p>\n");
    }

    #[test]
    fn test_links_open_new_context() {
        let html = parse_markdown_inline("see [my work](https://github.com/me)");
        assert_eq!(
            html,
            r#"see <a href="https://github.com/me" target="_blank" rel="noopener noreferrer">my work</a>"#
        );
    }

    #[test]
    fn test_link_title_escaped() {
        let html = parse_markdown_inline(r#"[x](https://e.com "a \"b\"")"#);
        assert!(html.contains(r#"title="a &quot;b&quot;""#));
    }

    #[test]
    fn test_link_url_cannot_break_attribute() {
        let html = parse_markdown_inline(r#"[x](https://e.com/a"b<c)"#);
        assert!(html.starts_with(r#"<a href="https://e.com/a%22b%3Cc" target="_blank""#));
    }

    #[test]
    fn test_link_query_keeps_meaning() {
        let html = parse_markdown_inline("[x](https://e.com/p?a=1&b=2#top)");
        assert!(html.contains(r#"href="https://e.com/p?a=1&amp;b=2#top""#));
    }

    #[test]
    fn test_image_src_encoded() {
        let html = parse_markdown_inline(r#"![pic](img/my"cat>.png)"#);
        assert_eq!(html, r#"<img src="img/my%22cat%3E.png" class="md-image" loading="lazy" />"#);
    }

    #[test]
    fn test_image_drops_alt_text() {
        let html = parse_markdown_inline("![a *cat*](cat.png)");
        assert_eq!(html, r#"<img src="cat.png" class="md-image" loading="lazy" />"#);
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown_inline("hi <script>x</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
