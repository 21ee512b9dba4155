//! Generator module - writes rendered pages and assets into the public directory

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tera::Context;

use crate::content::Page;
use crate::error::{RenderError, Result};
use crate::templates::{TemplateKind, TemplateSet};
use crate::Slate;

/// Renders pages through the site's templates
pub struct Generator<'a> {
    slate: &'a Slate,
    templates: &'a TemplateSet,
}

impl<'a> Generator<'a> {
    pub fn new(slate: &'a Slate, templates: &'a TemplateSet) -> Self {
        Self { slate, templates }
    }

    /// Output location for a page URL
    pub fn output_path(&self, url: &str) -> PathBuf {
        self.slate.public_dir.join(url.trim_start_matches('/'))
    }

    /// Output location of the blog index
    pub fn blog_index_path(&self) -> PathBuf {
        self.slate
            .public_dir
            .join(self.slate.config.blog_dir.trim_matches('/'))
            .join("index.html")
    }

    /// Render one page with its fields as the template context
    pub fn render_page(&self, kind: TemplateKind, page: &Page, output: &Path) -> Result<()> {
        let context = Context::from_serialize(page).map_err(|source| RenderError::Template {
            template: self.templates.name(kind).to_string(),
            path: output.to_path_buf(),
            source,
        })?;
        self.write(kind, &context, output)
    }

    /// Render the blog index with the ordered post list as `posts`
    pub fn render_blog_index(&self, posts: &[Page]) -> Result<PathBuf> {
        let output = self.blog_index_path();
        let mut context = Context::new();
        context.insert("posts", posts);
        self.write(TemplateKind::BlogIndex, &context, &output)?;
        Ok(output)
    }

    /// Copy the stylesheet to the output root, if the site has one
    pub fn copy_stylesheet(&self) -> Result<Option<PathBuf>> {
        let stylesheet = &self.slate.config.stylesheet;
        let from = self.slate.static_dir.join(stylesheet);
        let Ok(bytes) = fs::read(&from) else {
            tracing::debug!("No stylesheet at {:?}", from);
            return Ok(None);
        };

        let to = self.slate.public_dir.join(stylesheet);
        create_parent_dir(&to)?;
        fs::write(&to, bytes).map_err(|source| RenderError::CopyAsset {
            from,
            to: to.clone(),
            source,
        })?;

        tracing::info!("Copied: {}", to.display());
        Ok(Some(to))
    }

    fn write(&self, kind: TemplateKind, context: &Context, output: &Path) -> Result<()> {
        create_parent_dir(output)?;

        let file = File::create(output).map_err(|source| RenderError::CreateFile {
            path: output.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        self.templates
            .render_to(kind, context, &mut writer)
            .map_err(|source| RenderError::Template {
                template: self.templates.name(kind).to_string(),
                path: output.to_path_buf(),
                source,
            })?;
        writer.flush().map_err(|source| RenderError::Write {
            path: output.to_path_buf(),
            source,
        })?;

        tracing::info!("Generated: {}", output.display());
        Ok(())
    }
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| RenderError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
