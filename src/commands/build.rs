//! Build the static site

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::content::loader::ContentLoader;
use crate::error::{PreconditionError, Result};
use crate::generator::Generator;
use crate::site::{PathRules, Site, HOME_URL};
use crate::templates::{TemplateKind, TemplateSet};
use crate::Slate;

/// What a build wrote
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Output files in the order they were written
    pub written: Vec<PathBuf>,
    /// Source paths of pages that were loaded but not rendered
    pub unrouted: Vec<String>,
}

/// Run the whole pipeline once.
///
/// Stops at the first fatal error; files already written stay in place.
pub fn run(slate: &Slate) -> Result<BuildReport> {
    let start = Instant::now();

    check_directory(&slate.content_dir, &slate.config.content_dir)?;
    check_directory(&slate.templates_dir, &slate.config.templates_dir)?;

    let pages = ContentLoader::new(slate).load_pages()?;
    tracing::info!("Loaded {} pages", pages.len());

    let templates = TemplateSet::load(slate)?;

    let site = Site::assemble(pages, &PathRules::from_config(&slate.config));
    let generator = Generator::new(slate, &templates);
    let mut report = BuildReport {
        unrouted: site.unrouted.iter().map(|p| p.path.clone()).collect(),
        ..Default::default()
    };

    if let Some(home) = &site.home {
        let output = generator.output_path(HOME_URL);
        generator.render_page(TemplateKind::Home, home, &output)?;
        report.written.push(output);
    }

    for post in &site.posts {
        let output = generator.output_path(&post.url);
        generator.render_page(TemplateKind::Post, post, &output)?;
        report.written.push(output);
    }

    report.written.push(generator.render_blog_index(&site.posts)?);

    if let Some(stylesheet) = generator.copy_stylesheet()? {
        report.written.push(stylesheet);
    }

    tracing::info!(
        "Generated {} files in {:.2}s",
        report.written.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(report)
}

fn check_directory(path: &Path, name: &str) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    Err(PreconditionError::MissingDirectory {
        path: PathBuf::from(name.trim_end_matches('/')),
        hint: "Did you run `slate init`?",
    }
    .into())
}
