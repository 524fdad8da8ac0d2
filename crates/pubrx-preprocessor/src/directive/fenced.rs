//! Fenced blocks: the body is kept as one contiguous block.

use super::params::Parameters;

pub(crate) fn render_coffeescript_sidebar(body: &str, params: &Parameters) -> String {
    let mut html = String::from("<div class=\"sidebar coffeescript\" markdown=\"1\">\n");
    if let Some(title) = params.get("title") {
        html.push_str(&format!("<div class=\"sidebar-title\">{title}</div>\n"));
    }
    html.push_str(body);
    html.push_str("\n</div>");
    html
}

pub(crate) fn render_table(body: &str, params: &Parameters) -> String {
    let mut html = String::from("<div class=\"table\" markdown=\"1\">\n");
    if let Some(caption) = params.get("caption") {
        html.push_str(&format!("<div class=\"caption\">{caption}</div>\n"));
    }
    html.push_str(body);
    html.push_str("\n</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_coffeescript_sidebar_keeps_body_contiguous() {
        let mut params = Parameters::new();
        params.insert("title", "In CoffeeScript");
        let html = render_coffeescript_sidebar("    square = (x) -> x * x\n    cube = (x) -> x", &params);
        assert_eq!(
            html,
            "<div class=\"sidebar coffeescript\" markdown=\"1\">\n<div class=\"sidebar-title\">In CoffeeScript</div>\n    square = (x) -> x * x\n    cube = (x) -> x\n</div>"
        );
    }

    #[test]
    fn test_table_without_caption() {
        let html = render_table("| a | b |\n|---|---|", &Parameters::new());
        assert_eq!(
            html,
            "<div class=\"table\" markdown=\"1\">\n| a | b |\n|---|---|\n</div>"
        );
    }

    #[test]
    fn test_table_with_caption() {
        let mut params = Parameters::new();
        params.insert("caption", "Matchers");
        let html = render_table("| a |", &params);
        assert!(html.contains("<div class=\"caption\">Matchers</div>\n| a |"));
    }
}
