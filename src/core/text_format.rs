//! Text line formatting
//!
//! Each record becomes one line of space separated `key=value` pairs:
//!
//! ```text
//! time=2025-01-08T10:30:45.123Z level=FATAL msg="disk full" mount=/var
//! ```
//!
//! Values that are empty or contain whitespace, `=`, `"` or control
//! characters are quoted and escaped, so a record always stays on one line.

use super::log_context::FieldValue;
use super::log_record::LogRecord;
use super::severity::render_label;
use super::timestamp::FormatterConfig;
use std::fmt::Write;

pub const TIME_KEY: &str = "time";
pub const LEVEL_KEY: &str = "level";
pub const MESSAGE_KEY: &str = "msg";

#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    config: FormatterConfig,
}

impl TextFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Render a record as a single line, trailing newline included.
    pub fn format(&self, record: &LogRecord) -> String {
        let mut line = String::with_capacity(64 + record.message.len());

        if let Some(ref format) = self.config.timestamp {
            push_pair(&mut line, TIME_KEY, &format.format(&record.timestamp));
        }
        push_pair(&mut line, LEVEL_KEY, &render_label(record.severity));
        push_pair(&mut line, MESSAGE_KEY, &record.message);

        for (key, value) in record.context.fields() {
            match value {
                FieldValue::String(s) => push_pair(&mut line, key, s),
                other => push_pair(&mut line, key, &other.to_string()),
            }
        }

        line.push('\n');
        line
    }
}

fn push_pair(line: &mut String, key: &str, value: &str) {
    if !line.is_empty() {
        line.push(' ');
    }
    push_text(line, key);
    line.push('=');
    push_text(line, value);
}

fn push_text(line: &mut String, text: &str) {
    if needs_quoting(text) {
        quote_into(line, text);
    } else {
        line.push_str(text);
    }
}

fn needs_quoting(text: &str) -> bool {
    text.is_empty()
        || text
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '=' || c == '"')
}

fn quote_into(line: &mut String, text: &str) {
    line.push('"');
    for c in text.chars() {
        match c {
            '"' => line.push_str("\\\""),
            '\\' => line.push_str("\\\\"),
            '\n' => line.push_str("\\n"),
            '\r' => line.push_str("\\r"),
            '\t' => line.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(line, "\\u{{{:04x}}}", u32::from(c));
            }
            c => line.push(c),
        }
    }
    line.push('"');
}
