//! slate: a small static site generator
//!
//! Markdown files under `content/` (with optional `---` metadata headers)
//! are rendered through three Tera templates into `public/`. Pages under
//! `content/blog/` become blog posts listed newest first; `content/index.md`
//! becomes the home page.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod site;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::SlateError;

/// A site on disk: its configuration plus resolved directories
#[derive(Debug, Clone)]
pub struct Slate {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Markdown content directory
    pub content_dir: PathBuf,
    /// Template directory
    pub templates_dir: PathBuf,
    /// Static asset directory
    pub static_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Slate {
    /// Create a new instance from a directory, reading `slate.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config = config::SiteConfig::load_or_default(base_dir.as_ref())?;
        Ok(Self::with_config(base_dir, config))
    }

    /// Create a new instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();

        let content_dir = base_dir.join(&config.content_dir);
        let templates_dir = base_dir.join(&config.templates_dir);
        let static_dir = base_dir.join(&config.static_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            templates_dir,
            static_dir,
            public_dir,
        }
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<commands::init::InitReport> {
        commands::init::run(self)
    }

    /// Build the static site
    pub fn build(&self) -> error::Result<commands::build::BuildReport> {
        commands::build::run(self)
    }

    /// Path of a file relative to the site directory, with `/` separators.
    ///
    /// Paths outside the site directory are returned whole.
    pub fn source_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.base_dir) {
            Ok(relative) => relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => path.to_string_lossy().into_owned(),
        }
    }

    /// The content directory as it appears at the front of source paths
    pub fn content_root(&self) -> String {
        self.source_path(&self.content_dir)
    }
}
