//! Page model

use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

/// One loaded content file, ready for a template
///
/// Serialized field names are what templates see.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// Source path relative to the site directory, `/`-separated
    pub path: String,

    /// Public URL of the rendered output
    pub url: String,

    /// Metadata title, or one derived from the file name
    pub title: String,

    /// Publication date, if the metadata carried a valid one
    pub date: Option<NaiveDate>,

    /// Rendered HTML, inserted into templates verbatim
    pub content: String,

    /// Full source file path
    #[serde(skip)]
    pub full_source: PathBuf,
}

impl Page {
    /// Create a page with empty content
    pub fn new(path: String, url: String, title: String) -> Self {
        Self {
            full_source: PathBuf::from(&path),
            path,
            url,
            title,
            date: None,
            content: String::new(),
        }
    }
}
