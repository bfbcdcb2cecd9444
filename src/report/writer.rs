//! Indent-aware line builder for report output.
//!
//! Nested lines use 2-space indentation.

pub struct ReportWriter {
    buf: String,
    indent_level: usize,
}

impl ReportWriter {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(1024),
            indent_level: 0,
        }
    }

    /// Write a complete line (appends newline).
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.buf.push_str("  ");
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Write a GitHub Actions workflow command, `::name props::data`.
    pub fn command(&mut self, name: &str, properties: &[(&str, &str)], data: &str) {
        let mut text = format!("::{}", name);
        for (i, (key, value)) in properties.iter().enumerate() {
            text.push(if i == 0 { ' ' } else { ',' });
            text.push_str(key);
            text.push('=');
            text.push_str(&escape_property(value));
        }
        text.push_str("::");
        text.push_str(&escape_data(data));
        self.line(&text);
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
