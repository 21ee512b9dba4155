//! Metadata header parsing

use chrono::NaiveDate;
use serde::Deserialize;

use crate::helpers::parse_date;

/// Marker line that opens and closes a metadata header
const DELIMITER: &str = "---";

/// Metadata fields from a content file header
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
}

impl FrontMatter {
    /// Split a content file into its metadata and Markdown body.
    ///
    /// The header is only recognised when the input starts with `---` and a
    /// later line starts with `---`. Otherwise the whole input is the body.
    /// A header that fails to decode yields empty metadata; this never fails.
    pub fn parse(content: &str) -> (Self, &str) {
        Self::parse_with_source(content, "<input>")
    }

    /// Same as [`FrontMatter::parse`], naming `source` in decode warnings
    pub fn parse_with_source<'a>(content: &'a str, source: &str) -> (Self, &'a str) {
        let Some(rest) = content.strip_prefix(DELIMITER) else {
            return (Self::default(), content);
        };

        let closing = format!("\n{}", DELIMITER);
        let Some(end_pos) = rest.find(&closing) else {
            return (Self::default(), content);
        };

        let block = &rest[..end_pos];
        let block = block.strip_prefix('\n').unwrap_or(block);

        let body = &rest[end_pos + closing.len()..];
        let body = body.strip_prefix('\n').unwrap_or(body);

        (Self::decode(block, source), body)
    }

    fn decode(block: &str, source: &str) -> Self {
        if block.trim().is_empty() {
            return Self::default();
        }

        match serde_yaml::from_str::<FrontMatter>(block) {
            Ok(fm) => fm,
            Err(e) => {
                tracing::warn!("Ignoring malformed metadata header in {}: {}", source, e);
                Self::default()
            }
        }
    }

    /// The title, unless it is missing or empty
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Parse the date field; anything but `YYYY-MM-DD` is no date
    pub fn parse_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date)
    }
}
