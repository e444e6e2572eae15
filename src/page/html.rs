//! Small HTML writing helpers.

/// Escape text for element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Make JSON safe to embed in a `<script>` element.
pub fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// Line-oriented HTML builder with indentation.
pub struct HtmlWriter {
    buf: String,
    depth: usize,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(8 * 1024),
            depth: 0,
        }
    }

    /// Write one line at the current depth.
    pub fn line(&mut self, content: impl AsRef<str>) -> &mut Self {
        for _ in 0..self.depth {
            self.buf.push_str("  ");
        }
        self.buf.push_str(content.as_ref());
        self.buf.push('\n');
        self
    }

    /// Write an opening tag line and indent.
    pub fn open(&mut self, tag: impl AsRef<str>) -> &mut Self {
        self.line(tag);
        self.depth += 1;
        self
    }

    /// Dedent and write a closing tag line.
    pub fn close(&mut self, tag: impl AsRef<str>) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.line(tag)
    }

    /// `<tag class="class">text</tag>` with `text` escaped.
    pub fn text_element(&mut self, tag: &str, class: &str, text: &str) -> &mut Self {
        self.line(format!(r#"<{tag} class="{class}">{}</{tag}>"#, escape(text)))
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("日本語"), "日本語");
    }

    #[test]
    fn test_script_safe_json() {
        assert_eq!(
            script_safe_json(r#"{"en":"</script><b>"}"#),
            r#"{"en":"<\/script><b>"}"#
        );
    }

    #[test]
    fn test_writer_indents_nested_elements() {
        let mut w = HtmlWriter::new();
        w.open("<div>").text_element("p", "note", "a < b").close("</div>");
        assert_eq!(
            w.finish(),
            "<div>\n  <p class=\"note\">a &lt; b</p>\n</div>\n"
        );
    }

    #[test]
    fn test_close_never_underflows() {
        let mut w = HtmlWriter::new();
        w.close("</div>").line("x");
        assert_eq!(w.finish(), "</div>\nx\n");
    }
}
