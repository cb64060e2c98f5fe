//! Re-indenter for the minified markup the renderers emit.
//!
//! The renderers build markup by string concatenation with no whitespace at
//! all, which keeps them simple but makes the output unreadable in a diff.
//! [`prettify`] rebuilds it with one element per line and four-space
//! indentation. Elements whose contents belong on one line (table rows, list
//! items, spans, titles) stay inline, and `<br/>` stays self-closed.
//!
//! This is a scanner for our own output, not a general HTML parser: tags are
//! well formed, attribute values never contain `<` or `>`, and there are no
//! comments or CDATA sections.

const SINGLE_LINE_TAGS: [&str; 4] = ["tr", "li", "span", "title"];
const EMPTY_TAGS: [&str; 1] = ["br"];

struct PrettyWriter<'a> {
    out: String,
    indent: usize,
    /// Open single-line elements; non-empty means stay on the current line.
    single_line: Vec<&'a str>,
}

impl<'a> PrettyWriter<'a> {
    fn newline_indent(&mut self) {
        self.out.push('\n');
        for _ in 0..self.indent {
            self.out.push_str("    ");
        }
    }

    /// `raw` is the tag text without brackets or the self-closing slash.
    fn start_tag(&mut self, name: &'a str, raw: &str) {
        if self.single_line.is_empty() {
            self.newline_indent();
        }
        self.out.push('<');
        self.out.push_str(raw);
        if SINGLE_LINE_TAGS.contains(&name) {
            self.single_line.push(name);
        }
        if EMPTY_TAGS.contains(&name) {
            self.out.push_str("/>");
        } else {
            self.out.push('>');
            self.indent += 1;
        }
    }

    fn end_tag(&mut self, name: &str) {
        if EMPTY_TAGS.contains(&name) {
            return;
        }
        self.indent = self.indent.saturating_sub(1);
        if self.single_line.is_empty() {
            self.newline_indent();
        }
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
        if self.single_line.last() == Some(&name) {
            self.single_line.pop();
        }
    }

    fn data(&mut self, data: &str) {
        if self.single_line.is_empty() {
            for line in data.lines() {
                self.newline_indent();
                self.out.push_str(line);
            }
        } else {
            self.out.push_str(data);
        }
    }
}

/// Re-indents minified markup. The result starts with a newline so the
/// root element sits at column zero.
pub fn prettify(html: &str) -> String {
    let mut writer = PrettyWriter {
        out: String::with_capacity(html.len() * 2),
        indent: 0,
        single_line: Vec::new(),
    };

    let mut rest = html;
    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('<') {
            let Some(end) = after.find('>') else {
                writer.data(rest);
                break;
            };
            let tag = &after[..end];
            if let Some(name) = tag.strip_prefix('/') {
                writer.end_tag(name.trim());
            } else {
                let body = tag.strip_suffix('/').unwrap_or(tag);
                let name = body.split_whitespace().next().unwrap_or(body);
                writer.start_tag(name, body);
                if tag.ends_with('/') {
                    writer.end_tag(name);
                }
            }
            rest = &after[end + 1..];
        } else {
            let end = rest.find('<').unwrap_or(rest.len());
            writer.data(&rest[..end]);
            rest = &rest[end..];
        }
    }
    writer.out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_elements_indent_one_level_per_depth() {
        let pretty = prettify("<table><tbody><tr><td>1</td></tr></tbody></table>");
        assert_eq!(
            pretty,
            "\n<table>\
             \n    <tbody>\
             \n        <tr><td>1</td></tr>\
             \n    </tbody>\
             \n</table>"
        );
    }

    #[test]
    fn single_line_elements_keep_their_contents_inline() {
        let pretty = prettify(r#"<ul><li>a <span class="x">b</span></li><li>c</li></ul>"#);
        assert_eq!(
            pretty,
            "\n<ul>\
             \n    <li>a <span class=\"x\">b</span></li>\
             \n    <li>c</li>\
             \n</ul>"
        );
    }

    #[test]
    fn br_stays_self_closed() {
        let pretty = prettify("<td>+5<br/>200</td>");
        assert_eq!(pretty, "\n<td>\n    +5\n    <br/>\n    200\n</td>");

        let inline = prettify("<span>+5<br/>200</span>");
        assert_eq!(inline, "\n<span>+5<br/>200</span>");
    }

    #[test]
    fn attributes_pass_through_untouched() {
        let pretty = prettify(r#"<td class="souls" title="200 souls"></td>"#);
        assert_eq!(pretty, "\n<td class=\"souls\" title=\"200 souls\">\n</td>");
    }

    #[test]
    fn markup_embedded_in_data_is_treated_as_markup() {
        let pretty = prettify("<li>Firelink <b>IS NOT</b> looted at start.</li>");
        assert_eq!(pretty, "\n<li>Firelink <b>IS NOT</b> looted at start.</li>");
    }
}
