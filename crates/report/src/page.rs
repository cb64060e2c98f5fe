//! Full-page wrapper around a rendered route body.

use crate::pretty::prettify;

/// Stylesheet embedded into the page at build time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Light,
    Dark,
}

impl Style {
    pub const fn name(self) -> &'static str {
        match self {
            Style::Light => "light",
            Style::Dark => "dark",
        }
    }

    const fn css(self) -> &'static str {
        match self {
            Style::Light => include_str!("../assets/light.css"),
            Style::Dark => include_str!("../assets/dark.css"),
        }
    }
}

/// Wraps `body` into a complete pretty-printed page.
///
/// An empty `title` omits the `<title>` element.
pub fn page(body: &str, title: &str, style: Style) -> String {
    let title = if title.is_empty() {
        String::new()
    } else {
        format!("<title>{title}</title>")
    };
    let style = format!("<style>{}</style>", style.css());
    prettify(&format!(
        "<html><head>{title}{style}</head><body>{body}</body></html>"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titled_pages_carry_a_title_element() {
        let html = page("<p>hello</p>", "Route Index", Style::Light);
        assert!(html.contains("<title>Route Index</title>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<p>"));
    }

    #[test]
    fn an_empty_title_is_omitted_entirely() {
        let html = page("<p>hello</p>", "", Style::Light);
        assert!(!html.contains("<title>"));
    }

    #[test]
    fn both_styles_embed_a_stylesheet() {
        for style in [Style::Light, Style::Dark] {
            let html = page("<p>hi</p>", "t", style);
            assert!(html.contains("table.route"), "{} css missing", style.name());
        }
    }
}
