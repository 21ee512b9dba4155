//! Content loader - loads pages from the content directory

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer, Page};
use crate::error::{LoadError, Result};
use crate::helpers::{extract_title, path_to_url};
use crate::Slate;

/// Loads content from the content directory
pub struct ContentLoader<'a> {
    slate: &'a Slate,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(slate: &'a Slate) -> Self {
        let renderer = MarkdownRenderer::with_config(&slate.config.markdown);
        Self { slate, renderer }
    }

    /// Find every Markdown file under the content directory.
    ///
    /// Entries that cannot be accessed are logged and skipped. Files come
    /// back in lexical walk order.
    pub fn find_markdown_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.slate.content_dir).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                    tracing::warn!("Could not access {:?}: {}", path, e);
                    continue;
                }
            };

            if entry.file_type().is_file() && is_markdown_file(entry.path()) {
                tracing::info!("Found markdown file: {}", entry.path().display());
                files.push(entry.into_path());
            }
        }

        files
    }

    /// Load all pages, in walk order
    pub fn load_pages(&self) -> Result<Vec<Page>> {
        self.find_markdown_files()
            .iter()
            .map(|path| self.load_page(path))
            .collect()
    }

    /// Load a single page from a file
    pub fn load_page(&self, path: &Path) -> Result<Page> {
        let bytes = fs::read(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let source = self.slate.source_path(path);
        let raw = String::from_utf8(bytes).unwrap_or_else(|e| {
            tracing::warn!("{} is not valid UTF-8, replacing invalid bytes", source);
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        });
        let (fm, body) = FrontMatter::parse_with_source(&raw, &source);

        let content = self
            .renderer
            .render(body)
            .map_err(|source| LoadError::Markdown {
                path: path.to_path_buf(),
                source,
            })?;

        let title = fm
            .title()
            .map(str::to_string)
            .unwrap_or_else(|| extract_title(&source));

        let url = path_to_url(&source, &self.slate.content_root());

        let mut page = Page::new(source, url, title);
        page.date = fm.parse_date();
        page.content = content;
        page.full_source = path.to_path_buf();

        Ok(page)
    }
}

/// Check if a file is a markdown file (extension matched case-insensitively)
fn is_markdown_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_ascii_lowercase().ends_with(".md"))
        .unwrap_or(false)
}
