//! Initialize a new site

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::Slate;

/// Outcome of scaffolding, in the order files were considered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Create the directory layout and starter files.
///
/// Existing files are left alone.
pub fn run(slate: &Slate) -> Result<InitReport> {
    let blog_dir = slate.content_dir.join(&slate.config.blog_dir);
    let dirs = [
        &slate.content_dir,
        &blog_dir,
        &slate.templates_dir,
        &slate.static_dir,
    ];

    for dir in dirs {
        fs::create_dir_all(dir)
            .with_context(|| format!("Error creating directory {}", dir.display()))?;
        tracing::info!("Created: {}/", dir.display());
    }

    let templates = &slate.config.templates;
    let files = [
        (
            slate.content_dir.join(&slate.config.home_source),
            include_str!("starter/index.md"),
        ),
        (blog_dir.join("hello.md"), include_str!("starter/hello.md")),
        (
            slate.templates_dir.join(&templates.home),
            include_str!("starter/home.html"),
        ),
        (
            slate.templates_dir.join(&templates.post),
            include_str!("starter/post.html"),
        ),
        (
            slate.templates_dir.join(&templates.blog_index),
            include_str!("starter/blog_index.html"),
        ),
        (
            slate.static_dir.join(&slate.config.stylesheet),
            include_str!("starter/styles.css"),
        ),
    ];

    let mut report = InitReport::default();
    for (path, content) in files {
        if path.exists() {
            tracing::info!("Skipped (exists): {}", path.display());
            report.skipped.push(path);
            continue;
        }

        fs::write(&path, content)
            .with_context(|| format!("Error creating file {}", path.display()))?;
        tracing::info!("Created: {}", path.display());
        report.created.push(path);
    }

    Ok(report)
}
