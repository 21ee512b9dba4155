//! Content module - metadata headers, Markdown conversion and page loading

mod frontmatter;
pub mod loader;
mod markdown;
mod page;

pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use page::Page;
