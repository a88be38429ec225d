//! Short, single-line previews of response bodies for the log

use std::fmt;

/// Bytes of a body shown before it is cut.
const PREVIEW_BYTES: usize = 256;

/// Lazily formatted preview of a response body.
///
/// Line breaks are flattened so one response stays one log line. Bodies longer
/// than [`PREVIEW_BYTES`] are cut on a char boundary and followed by their full
/// size. Nothing is formatted unless the log record is actually emitted.
pub struct BodyPreview<'a>(pub &'a str);

impl BodyPreview<'_> {
    fn shown(&self) -> &str {
        let body = self.0;
        if body.len() <= PREVIEW_BYTES {
            return body;
        }
        let end = body
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .take_while(|&end| end <= PREVIEW_BYTES)
            .last()
            .unwrap_or(0);
        &body[..end]
    }
}

impl fmt::Display for BodyPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.shown().chars() {
            match c {
                '\r' => {}
                '\n' | '\t' => f.write_str(" ")?,
                c => write!(f, "{c}")?,
            }
        }
        if self.0.len() > PREVIEW_BYTES {
            write!(f, "… ({} bytes)", self.0.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_shown_whole() {
        assert_eq!(BodyPreview(r#"{"amount":100}"#).to_string(), r#"{"amount":100}"#);
    }

    #[test]
    fn pretty_printed_json_stays_on_one_line() {
        let body = "{\r\n\t\"name\": \"Checking\"\n}";
        assert_eq!(BodyPreview(body).to_string(), "{  \"name\": \"Checking\" }");
    }

    #[test]
    fn long_body_reports_its_size() {
        let body = format!("[{}]", "1,".repeat(200));
        let preview = BodyPreview(&body).to_string();
        assert!(preview.starts_with("[1,1,"));
        assert!(preview.ends_with("… (402 bytes)"));
    }

    #[test]
    fn cut_lands_on_a_char_boundary() {
        let body = "€".repeat(100);
        let preview = BodyPreview(&body).to_string();
        assert!(preview.starts_with("€€€"));
        assert!(preview.ends_with("… (300 bytes)"));
        assert_eq!(preview.chars().filter(|c| *c == '€').count(), PREVIEW_BYTES / 3);
    }
}
