//! Site assembly - decides which pages are rendered and in what order

use crate::config::SiteConfig;
use crate::content::Page;

/// URL the home page is always published at
pub const HOME_URL: &str = "/index.html";

/// What a loaded page becomes in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// The landing page, rendered with the home template
    Home,
    /// A blog post, rendered with the post template and listed in the index
    Post,
    /// Loaded but not rendered
    Unrouted,
}

/// Classification policy for loaded pages
pub trait PagePolicy {
    fn classify(&self, page: &Page) -> PageKind;
}

/// Classifies by plain string tests on the source path:
/// a suffix match for the home page, a `/<dir>/` substring for posts.
#[derive(Debug, Clone)]
pub struct PathRules {
    home_suffix: String,
    blog_segment: String,
}

impl PathRules {
    pub fn new(home_suffix: &str, blog_dir: &str) -> Self {
        Self {
            home_suffix: home_suffix.to_string(),
            blog_segment: format!("/{}/", blog_dir.trim_matches('/')),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.home_source, &config.blog_dir)
    }
}

impl PagePolicy for PathRules {
    fn classify(&self, page: &Page) -> PageKind {
        if page.path.ends_with(&self.home_suffix) {
            PageKind::Home
        } else if page.path.contains(&self.blog_segment) {
            PageKind::Post
        } else {
            PageKind::Unrouted
        }
    }
}

/// Pages grouped for rendering
#[derive(Debug, Clone, Default)]
pub struct Site {
    /// The home page, with its URL fixed to [`HOME_URL`]
    pub home: Option<Page>,
    /// Blog posts, newest first
    pub posts: Vec<Page>,
    /// Pages that are neither; kept so callers can report them
    pub unrouted: Vec<Page>,
}

impl Site {
    /// Classify pages and order the posts
    pub fn assemble<P: PagePolicy>(pages: Vec<Page>, policy: &P) -> Self {
        let mut site = Site::default();

        for page in pages {
            match policy.classify(&page) {
                PageKind::Home => {
                    if let Some(previous) = site.home.replace(page) {
                        tracing::warn!(
                            "Several home page candidates, {} replaces {}",
                            site.home.as_ref().map(|p| p.path.as_str()).unwrap_or_default(),
                            previous.path
                        );
                    }
                }
                PageKind::Post => site.posts.push(page),
                PageKind::Unrouted => {
                    tracing::info!("Not rendered (neither home page nor blog post): {}", page.path);
                    site.unrouted.push(page);
                }
            }
        }

        if let Some(home) = site.home.as_mut() {
            home.url = HOME_URL.to_string();
        }

        sort_posts(&mut site.posts);

        site
    }
}

/// Sort posts newest first. Undated posts go last; ties keep their order.
pub fn sort_posts(posts: &mut [Page]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::parse_date;

    fn page(path: &str, date: Option<&str>) -> Page {
        let mut page = Page::new(
            path.to_string(),
            crate::helpers::path_to_url(path, "content"),
            path.to_string(),
        );
        page.date = date.and_then(parse_date);
        page
    }

    fn rules() -> PathRules {
        PathRules::from_config(&SiteConfig::default())
    }

    #[test]
    fn test_classify() {
        let rules = rules();
        assert_eq!(rules.classify(&page("content/index.md", None)), PageKind::Home);
        assert_eq!(
            rules.classify(&page("content/blog/hello.md", None)),
            PageKind::Post
        );
        assert_eq!(
            rules.classify(&page("content/about.md", None)),
            PageKind::Unrouted
        );
        assert_eq!(
            rules.classify(&page("content/blog/index.md", None)),
            PageKind::Home
        );
        assert_eq!(
            rules.classify(&page("content/blogroll.md", None)),
            PageKind::Unrouted
        );
    }

    #[test]
    fn test_sort_posts_newest_first_undated_last() {
        let mut posts = vec![
            page("content/blog/a.md", Some("2024-01-01")),
            page("content/blog/b.md", None),
            page("content/blog/c.md", Some("2025-06-01")),
        ];
        sort_posts(&mut posts);

        let order: Vec<_> = posts.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            order,
            vec!["content/blog/c.md", "content/blog/a.md", "content/blog/b.md"]
        );
    }

    #[test]
    fn test_sort_posts_is_stable() {
        let mut posts = vec![
            page("content/blog/x.md", None),
            page("content/blog/a.md", Some("2024-01-01")),
            page("content/blog/y.md", None),
            page("content/blog/b.md", Some("2024-01-01")),
        ];
        sort_posts(&mut posts);

        let order: Vec<_> = posts.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "content/blog/a.md",
                "content/blog/b.md",
                "content/blog/x.md",
                "content/blog/y.md"
            ]
        );
    }

    #[test]
    fn test_assemble() {
        let pages = vec![
            page("content/about.md", None),
            page("content/blog/old.md", Some("2020-05-05")),
            page("content/blog/new.md", Some("2024-05-05")),
            page("content/index.md", None),
        ];
        let site = Site::assemble(pages, &rules());

        let home = site.home.unwrap();
        assert_eq!(home.path, "content/index.md");
        assert_eq!(home.url, HOME_URL);
        assert_eq!(site.posts[0].path, "content/blog/new.md");
        assert_eq!(site.posts[1].path, "content/blog/old.md");
        assert_eq!(site.unrouted.len(), 1);
        assert_eq!(site.unrouted[0].path, "content/about.md");
    }

    #[test]
    fn test_assemble_last_home_candidate_wins() {
        let pages = vec![
            page("content/blog/index.md", None),
            page("content/index.md", None),
        ];
        let site = Site::assemble(pages, &rules());
        assert_eq!(site.home.unwrap().path, "content/index.md");
        assert!(site.posts.is_empty());
    }

    #[test]
    fn test_home_url_overridden_for_nested_home() {
        let site = Site::assemble(vec![page("content/blog/index.md", None)], &rules());
        assert_eq!(site.home.unwrap().url, HOME_URL);
    }

    #[test]
    fn test_custom_policy() {
        struct EverythingIsAPost;
        impl PagePolicy for EverythingIsAPost {
            fn classify(&self, _: &Page) -> PageKind {
                PageKind::Post
            }
        }

        let site = Site::assemble(
            vec![page("content/index.md", None), page("content/about.md", None)],
            &EverythingIsAPost,
        );
        assert!(site.home.is_none());
        assert_eq!(site.posts.len(), 2);
    }
}
