//! Site configuration (slate.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the optional configuration file in the site directory
pub const CONFIG_FILE: &str = "slate.yml";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Directory
    pub content_dir: String,
    pub templates_dir: String,
    pub static_dir: String,
    pub public_dir: String,

    /// The single stylesheet copied from `static_dir` to the output root
    pub stylesheet: String,

    /// File-name suffix identifying the home page
    pub home_source: String,
    /// Path segment identifying blog posts, also where the blog index goes
    pub blog_dir: String,

    #[serde(default)]
    pub templates: TemplateNames,
    #[serde(default)]
    pub markdown: MarkdownConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            templates_dir: "templates".to_string(),
            static_dir: "static".to_string(),
            public_dir: "public".to_string(),

            stylesheet: "styles.css".to_string(),

            home_source: "index.md".to_string(),
            blog_dir: "blog".to_string(),

            templates: TemplateNames::default(),
            markdown: MarkdownConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Load `slate.yml` from a site directory, falling back to defaults
    pub fn load_or_default<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join(CONFIG_FILE);
        if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}

/// File names of the three page templates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateNames {
    pub home: String,
    pub post: String,
    pub blog_index: String,
}

impl Default for TemplateNames {
    fn default() -> Self {
        Self {
            home: "home.html".to_string(),
            post: "post.html".to_string(),
            blog_index: "blog_index.html".to_string(),
        }
    }
}

/// Markdown conversion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Highlight fenced code blocks with syntect
    pub highlight: bool,
    pub highlight_theme: String,
    pub line_numbers: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            highlight: false,
            highlight_theme: "base16-ocean.dark".to_string(),
            line_numbers: false,
        }
    }
}

/// Preview server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.templates.blog_index, "blog_index.html");
        assert_eq!(config.server.port, 8080);
        assert!(!config.markdown.highlight);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
public_dir: dist
blog_dir: posts
server:
  port: 3000
markdown:
  highlight: true
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.public_dir, "dist");
        assert_eq!(config.blog_dir, "posts");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.ip, "localhost");
        assert!(config.markdown.highlight);
        assert_eq!(config.content_dir, "content");
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.stylesheet, "styles.css");
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "server: [1, 2").unwrap();
        assert!(SiteConfig::load_or_default(dir.path()).is_err());
    }
}
