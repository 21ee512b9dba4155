//! Page templates, loaded from the site's templates directory with Tera

use serde_json::Value;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

use crate::error::{LoadError, PreconditionError, Result};
use crate::helpers::{escape_html, format_date, parse_date, DEFAULT_DISPLAY_FORMAT};
use crate::Slate;

/// The three templates every site provides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Home,
    Post,
    BlogIndex,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::Home,
        TemplateKind::Post,
        TemplateKind::BlogIndex,
    ];
}

/// Tera instance holding the site's templates
pub struct TemplateSet {
    tera: Tera,
    names: HashMap<&'static str, String>,
}

impl TemplateSet {
    /// Load and parse the home, post and blog index templates
    pub fn load(slate: &Slate) -> Result<Self> {
        let mut tera = Tera::default();

        // Autoescape stays on for .html; templates mark `content` as `safe`
        tera.set_escape_fn(escape_html);

        tera.register_filter("date_format", date_format_filter);

        let mut names = HashMap::new();
        for kind in TemplateKind::ALL {
            let name = template_file_name(slate, kind).to_string();
            let path = slate.templates_dir.join(&name);
            add_template(&mut tera, &path, &name)?;
            names.insert(key(kind), name);
        }

        Ok(Self { tera, names })
    }

    /// Name a template was registered under
    pub fn name(&self, kind: TemplateKind) -> &str {
        self.names.get(key(kind)).map(String::as_str).unwrap_or_default()
    }

    /// Render a template into a writer
    pub fn render_to<W: Write>(
        &self,
        kind: TemplateKind,
        context: &Context,
        writer: W,
    ) -> tera::Result<()> {
        self.tera.render_to(self.name(kind), context, writer)
    }
}

fn key(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Home => "home",
        TemplateKind::Post => "post",
        TemplateKind::BlogIndex => "blog_index",
    }
}

fn template_file_name(slate: &Slate, kind: TemplateKind) -> &str {
    let names = &slate.config.templates;
    match kind {
        TemplateKind::Home => &names.home,
        TemplateKind::Post => &names.post,
        TemplateKind::BlogIndex => &names.blog_index,
    }
}

fn add_template(tera: &mut Tera, path: &Path, name: &str) -> Result<()> {
    if !path.is_file() {
        return Err(PreconditionError::MissingTemplate {
            path: path.to_path_buf(),
        }
        .into());
    }

    tera.add_template_file(path, Some(name))
        .map_err(|source| LoadError::Template {
            path: PathBuf::from(path),
            source,
        })?;

    tracing::debug!("Loaded template {} from {:?}", name, path);
    Ok(())
}

/// Tera filter: format a `YYYY-MM-DD` date with a strftime pattern
///
/// Values that are not such a date pass through unchanged.
fn date_format_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => DEFAULT_DISPLAY_FORMAT.to_string(),
    };

    match parse_date(&s) {
        Some(date) => Ok(Value::String(format_date(&date, &format))),
        None => Ok(Value::String(s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SlateError;
    use serde_json::json;
    use std::fs;

    fn site_with_templates(templates: &[(&str, &str)]) -> (tempfile::TempDir, Slate) {
        let dir = tempfile::tempdir().unwrap();
        let templates_dir = dir.path().join("templates");
        fs::create_dir_all(&templates_dir).unwrap();
        for (name, body) in templates {
            fs::write(templates_dir.join(name), body).unwrap();
        }
        let slate = Slate::new(dir.path()).unwrap();
        (dir, slate)
    }

    #[test]
    fn test_date_format_filter() {
        let mut args = HashMap::new();
        args.insert("format".to_string(), json!("%b %-d, %Y"));
        assert_eq!(
            date_format_filter(&json!("2025-01-17"), &args).unwrap(),
            json!("Jan 17, 2025")
        );
        assert_eq!(
            date_format_filter(&json!("2025-01-17"), &HashMap::new()).unwrap(),
            json!("January 17, 2025")
        );
        assert_eq!(
            date_format_filter(&json!("someday"), &HashMap::new()).unwrap(),
            json!("someday")
        );
    }

    #[test]
    fn test_load_and_render() {
        let (_dir, slate) = site_with_templates(&[
            ("home.html", "<h1>{{ title }}</h1>{{ content | safe }}"),
            ("post.html", "{{ date | date_format }}"),
            ("blog_index.html", "{% for p in posts %}{{ p.url }};{% endfor %}"),
        ]);
        let templates = TemplateSet::load(&slate).unwrap();

        let mut context = Context::new();
        context.insert("title", "A & B");
        context.insert("content", "<p>x</p>");
        let mut out = Vec::new();
        templates
            .render_to(TemplateKind::Home, &context, &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<h1>A &amp; B</h1><p>x</p>"
        );

        let mut context = Context::new();
        context.insert("posts", &[json!({ "url": "/blog/a<b>.html" })]);
        let mut out = Vec::new();
        templates
            .render_to(TemplateKind::BlogIndex, &context, &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/blog/a&lt;b&gt;.html;");
    }

    #[test]
    fn test_missing_template() {
        let (_dir, slate) = site_with_templates(&[
            ("home.html", "home"),
            ("post.html", "post"),
        ]);
        let err = TemplateSet::load(&slate).err().unwrap();
        match err {
            SlateError::Precondition(PreconditionError::MissingTemplate { path }) => {
                assert!(path.ends_with("templates/blog_index.html"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unparsable_template() {
        let (_dir, slate) = site_with_templates(&[
            ("home.html", "{% if title %}never closed"),
            ("post.html", "post"),
            ("blog_index.html", "index"),
        ]);
        let err = TemplateSet::load(&slate).err().unwrap();
        assert!(matches!(
            err,
            SlateError::Load(LoadError::Template { .. })
        ));
    }
}
