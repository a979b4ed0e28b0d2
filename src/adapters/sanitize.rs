//! Log sanitization for survey data and credentials.
//!
//! Assessment answers are personal mental-health data and must not end up
//! in log files, even when a debug line formats a request payload. This
//! module provides string-based redaction for:
//! - indicator name→value pairs (JSON payload fragments)
//! - contextual secrets (API keys, bearer tokens)
//! - email addresses
//!
//! Sanitizing strings is a defense-in-depth fallback; the primary protection
//! is that payloads are only ever logged at debug level as opaque summaries.

use regex::Regex;
use std::sync::OnceLock;
use tracing_subscriber::fmt::MakeWriter;

use crate::domain::catalog;

/// Maximum number of bytes to sanitize per line. Longer lines are truncated;
/// scanning unbounded untrusted text is a CPU hazard.
const SANITIZE_MAX_BYTES: usize = 16 * 1024;

struct Patterns {
    indicator_pair: Regex,
    secret: Regex,
    email: Regex,
}

fn get_patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        // Matches "anxiety_level": 5 and anxiety_level=5 forms. Built from
        // the catalog so the pattern tracks the schema.
        let names = catalog()
            .iter()
            .map(|d| d.name)
            .collect::<Vec<_>>()
            .join("|");
        let indicator_pair = Regex::new(&format!(
            r#""?({names})"?\s*[:=]\s*-?\d+"#
        ))
        .expect("valid indicator regex");

        let secret = Regex::new(
            r"(?i)\b(?:api[_-]?key|access[_-]?token|bearer|secret|password|token)\b\s*[:=]?\s*[A-Za-z0-9+/_\-\.]{16,}={0,2}",
        )
        .expect("valid secret regex");

        let email = Regex::new(
            r"(?i)\b[a-z0-9](?:[a-z0-9._%+-]{0,62}[a-z0-9])?@(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,}\b",
        )
        .expect("valid email regex");

        Patterns {
            indicator_pair,
            secret,
            email,
        }
    })
}

fn truncate_to_char_boundary(input: &str, max_bytes: usize) -> (&str, bool) {
    if input.len() <= max_bytes {
        return (input, false);
    }

    // Ensure we don't panic on UTF-8 boundaries.
    let mut end = max_bytes.min(input.len());
    while end > 0 && !input.is_char_boundary(end) {
        end -= 1;
    }
    (&input[..end], true)
}

/// Sanitize a string by replacing survey values and credentials.
#[must_use]
pub fn sanitize(input: &str) -> String {
    let patterns = get_patterns();
    let (prefix, truncated) = truncate_to_char_boundary(input, SANITIZE_MAX_BYTES);

    let mut result = patterns
        .indicator_pair
        .replace_all(prefix, "$1: [REDACTED]")
        .to_string();
    result = patterns
        .secret
        .replace_all(&result, "[REDACTED-SECRET]")
        .to_string();
    result = patterns
        .email
        .replace_all(&result, "[REDACTED-EMAIL]")
        .to_string();

    if truncated {
        result.push_str(" [TRUNCATED]");
    }
    result
}

/// Check if a string contains survey values or credentials.
#[must_use]
pub fn contains_sensitive(input: &str) -> bool {
    let patterns = get_patterns();
    let (prefix, _) = truncate_to_char_boundary(input, SANITIZE_MAX_BYTES);
    patterns.indicator_pair.is_match(prefix)
        || patterns.secret.is_match(prefix)
        || patterns.email.is_match(prefix)
}

/// A `tracing_subscriber` writer wrapper that sanitizes formatted log output
/// before it is written to the underlying sink.
///
/// Keeps sanitization centralized: no need to call `sanitize()` at every
/// callsite.
#[derive(Debug)]
pub struct SanitizingMakeWriter<M> {
    inner: M,
}

impl<M> SanitizingMakeWriter<M> {
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<M> Clone for SanitizingMakeWriter<M>
where
    M: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

pub struct SanitizingWriter<W> {
    inner: W,
    buffer: Vec<u8>,
}

impl<W> SanitizingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
        }
    }
}

impl<W> SanitizingWriter<W>
where
    W: std::io::Write,
{
    fn flush_lines(&mut self) -> std::io::Result<()> {
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line = self.buffer.drain(..=pos).collect::<Vec<u8>>();
            let line_str = String::from_utf8_lossy(&line);
            let sanitized = sanitize(&line_str);
            self.inner.write_all(sanitized.as_bytes())?;
        }
        Ok(())
    }
}

impl<W> std::io::Write for SanitizingWriter<W>
where
    W: std::io::Write,
{
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);

        // Prevent unbounded buffering if the formatter writes a huge line
        // with no newline; `sanitize()` also caps its own input.
        if self.buffer.len() > SANITIZE_MAX_BYTES * 2 {
            let s = String::from_utf8_lossy(&self.buffer).to_string();
            let sanitized = sanitize(&s);
            self.inner.write_all(sanitized.as_bytes())?;
            self.inner.write_all(b"\n[TRUNCATED]\n")?;
            self.buffer.clear();
            return Ok(buf.len());
        }

        self.flush_lines()?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_lines()?;

        if !self.buffer.is_empty() {
            let s = String::from_utf8_lossy(&self.buffer);
            let sanitized = sanitize(&s);
            self.inner.write_all(sanitized.as_bytes())?;
            self.buffer.clear();
        }

        self.inner.flush()
    }
}

impl<'a, M> MakeWriter<'a> for SanitizingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = SanitizingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        SanitizingWriter::new(self.inner.make_writer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacts_indicator_pairs() {
        let input = r#"payload {"anxiety_level": 18, "depression": 25} sent"#;
        let sanitized = sanitize(input);
        assert!(sanitized.contains("anxiety_level: [REDACTED]"));
        assert!(sanitized.contains("depression: [REDACTED]"));
        assert!(!sanitized.contains("18"));
        assert!(!sanitized.contains("25"));
    }

    #[test]
    fn test_redacts_query_style_pairs() {
        let sanitized = sanitize("submitting bullying=5");
        assert!(sanitized.contains("bullying: [REDACTED]"));
        assert!(!sanitized.contains('5'));
    }

    #[test]
    fn test_redacts_api_key() {
        let sanitized = sanitize("api_key=QWxhZGRpbjpvcGVuIHNlc2FtZQAB");
        assert!(sanitized.contains("[REDACTED-SECRET]"));
    }

    #[test]
    fn test_redacts_email() {
        let sanitized = sanitize("Contact: student@university.edu");
        assert!(sanitized.contains("[REDACTED-EMAIL]"));
    }

    #[test]
    fn test_clean_text_passes_through() {
        let input = "prediction received prediction=2 classes=3";
        assert_eq!(sanitize(input), input);
        assert!(!contains_sensitive(input));
    }

    #[test]
    fn test_contains_sensitive() {
        assert!(contains_sensitive(r#""sleep_quality": 1"#));
        assert!(!contains_sensitive("dataset loaded rows=50"));
    }

    #[test]
    fn test_truncates_large_inputs() {
        let mut input = "x".repeat(SANITIZE_MAX_BYTES + 64);
        input.push_str("\"headache\": 4");
        let sanitized = sanitize(&input);
        assert!(sanitized.ends_with("[TRUNCATED]"));
        assert!(!sanitized.contains("headache\": 4"));
    }
}
