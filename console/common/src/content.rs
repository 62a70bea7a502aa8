//! What the overlay displays, and the conversions between text and markup.

use std::fmt::Write;

/// Content pushed to a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Shown verbatim; never interpreted as HTML.
    Text(String),
    /// Trusted HTML, rendered as-is.
    Markup(String),
}

impl Content {
    pub fn text(s: impl Into<String>) -> Self {
        Content::Text(s.into())
    }

    pub fn markup(s: impl Into<String>) -> Self {
        Content::Markup(s.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(s) | Content::Markup(s) => s.is_empty(),
        }
    }

    /// The content as plain text, with markup reduced by [`markup_to_text`].
    pub fn to_plain_text(&self) -> String {
        match self {
            Content::Text(s) => s.clone(),
            Content::Markup(s) => markup_to_text(s),
        }
    }

    /// The content as HTML, with text escaped by [`escape_html`].
    pub fn to_markup(&self) -> String {
        match self {
            Content::Text(s) => escape_html(s),
            Content::Markup(s) => s.clone(),
        }
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Renders named sections as `<h3>name</h3><div>value</div><br/>` blocks.
pub fn render_sections_html(sections: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (name, value) in sections {
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "<h3>{}</h3><div>{}</div><br/>",
            escape_html(name),
            escape_html(value)
        );
    }
    out
}

/// Tags that end a visual line when markup is flattened to text.
const LINE_BREAKING_TAGS: [&str; 6] = ["br", "/div", "/h3", "/p", "/li", "/tr"];

/// Reduces HTML to the text a reader would see.
///
/// Line-breaking tags become `\n`, every other tag is dropped, and the five
/// entities produced by [`escape_html`] are decoded. A run of blank lines
/// collapses to one, so sections stay visually separated, and trailing
/// whitespace is trimmed.
pub fn markup_to_text(markup: &str) -> String {
    let mut raw = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(open) = rest.find('<') {
        raw.push_str(&rest[..open]);
        let Some(close) = rest[open..].find('>') else {
            // Unterminated tag: keep the remainder as text.
            raw.push_str(&rest[open..]);
            rest = "";
            break;
        };
        let tag = rest[open + 1..open + close].trim().trim_end_matches('/').trim();
        let name = tag.split_whitespace().next().unwrap_or("").to_ascii_lowercase();
        if LINE_BREAKING_TAGS.contains(&name.as_str()) {
            raw.push('\n');
        }
        rest = &rest[open + close + 1..];
    }
    raw.push_str(rest);

    let decoded = decode_entities(&raw);
    let mut lines: Vec<&str> = Vec::new();
    for line in decoded.lines().map(str::trim_end) {
        if line.is_empty() && lines.last().is_none_or(|l| l.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

fn decode_entities(input: &str) -> String {
    const ENTITIES: [(&str, char); 5] = [
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#39;", '\''),
        ("&amp;", '&'),
    ];
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match ENTITIES.iter().find(|(entity, _)| tail.starts_with(entity)) {
            Some((entity, c)) => {
                out.push(*c);
                rest = &tail[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
