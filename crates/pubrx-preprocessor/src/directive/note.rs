//! Boxed notes: sidebars, letters, interpolations and definitions.
//!
//! Every body line is wrapped in its own `markdown="1"` block so the markdown
//! converter still processes inline markup inside each line.

use super::kind::Interpolation;
use super::params::Parameters;

/// Body lines without a CRLF document's trailing `\r`.
fn body_lines(body: &str) -> impl Iterator<Item = &str> {
    body.split('\n').map(|line| line.trim_end_matches('\r'))
}

/// Wrap each body line in `<div class="{class}" markdown="1">`.
fn wrap_lines(body: &str, class: &str) -> String {
    body_lines(body)
        .map(|line| format!(r#"<div class="{class}" markdown="1">{line}</div>"#))
        .collect::<Vec<_>>()
        .join("\n")
}

fn title_block(class: &str, title: &str) -> String {
    format!("<div class=\"{class}\">{title}</div>\n")
}

pub(crate) fn render_sidebar(body: &str, params: &Parameters) -> String {
    let mut html = String::from("<div class=\"sidebar\" markdown=\"1\">\n");
    if let Some(title) = params.get("title") {
        html.push_str(&title_block("sidebar-title", title));
    }
    html.push_str(&wrap_lines(body, "sidebar-body"));
    html.push_str("</div>");
    html
}

/// Like a sidebar, inside a quotation container.
pub(crate) fn render_letter(body: &str, params: &Parameters) -> String {
    let mut html = String::from("<blockquote class=\"letter\" markdown=\"1\">\n");
    html.push_str("<div class=\"letter\" markdown=\"1\">\n");
    if let Some(title) = params.get("title") {
        html.push_str(&title_block("letter-title", title));
    }
    html.push_str(&wrap_lines(body, "letter-body"));
    html.push_str("</div>\n</blockquote>");
    html
}

pub(crate) fn render_interpolation(
    interpolation: Interpolation,
    body: &str,
    params: &Parameters,
) -> String {
    let caption = params.get("title").unwrap_or(interpolation.caption());
    let mut html = format!(
        "<div class=\"interpolation {}\" markdown=\"1\">\n",
        interpolation.class()
    );
    html.push_str(&title_block("interpolation-title", caption));
    html.push_str(&wrap_lines(body, "interpolation-body"));
    html.push_str("</div>");
    html
}

/// The term in bold followed by the body as a single line.
pub(crate) fn render_definition(term: &str, body: &str) -> String {
    let text = body_lines(body).collect::<Vec<_>>().join(" ");
    format!(r#"<div class="definition" markdown="1"><strong>{term}</strong> {text}</div>"#)
}
