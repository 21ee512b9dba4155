//! URL and title derivation from source paths

/// Extension swapped out of source paths. Matching is case-sensitive here
/// even though discovery accepts any case.
const MARKDOWN_EXT: &str = ".md";

/// Convert a content path to the public URL of its rendered page
///
/// # Examples
/// ```
/// use slate::helpers::path_to_url;
/// assert_eq!(path_to_url("content/blog/my-post.md", "content"), "/blog/my-post.html");
/// ```
pub fn path_to_url(path: &str, content_root: &str) -> String {
    let root = content_root.trim_end_matches('/');
    let url = path.strip_prefix(root).unwrap_or(path);
    let url = url.strip_suffix(MARKDOWN_EXT).unwrap_or(url);

    if url.starts_with('/') {
        format!("{}.html", url)
    } else {
        format!("/{}.html", url)
    }
}

/// Turn a file name into a readable title
///
/// # Examples
/// ```
/// use slate::helpers::extract_title;
/// assert_eq!(extract_title("content/blog/my_first-post.md"), "My First Post");
/// ```
pub fn extract_title(path: &str) -> String {
    let base = path.rsplit('/').next().unwrap_or(path);
    let name = base.strip_suffix(MARKDOWN_EXT).unwrap_or(base);
    title_case(&name.replace(['_', '-'], " "))
}

/// Upper-case the first letter of every word, leaving the rest untouched
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev = ' ';
    for c in s.chars() {
        if is_separator(prev) {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        prev = c;
    }
    result
}

/// Word boundaries for title casing
fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_to_url() {
        assert_eq!(
            path_to_url("content/blog/hello.md", "content"),
            "/blog/hello.html"
        );
        assert_eq!(path_to_url("content/about.md", "content/"), "/about.html");
        assert_eq!(path_to_url("content/index.md", "content"), "/index.html");
    }

    #[test]
    fn test_path_to_url_is_stable_after_stripping_root() {
        let once = path_to_url("content/blog/a/b.md", "content");
        let again = path_to_url("/blog/a/b.md", "content");
        assert_eq!(once, again);
        assert!(once.ends_with(".html"));
    }

    #[test]
    fn test_path_to_url_outside_root() {
        assert_eq!(path_to_url("notes/x.md", "content"), "/notes/x.html");
    }

    #[test]
    fn test_path_to_url_keeps_uppercase_extension() {
        assert_eq!(
            path_to_url("content/blog/POST.MD", "content"),
            "/blog/POST.MD.html"
        );
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(
            extract_title("content/blog/my_first-post.md"),
            "My First Post"
        );
        assert_eq!(extract_title("index.md"), "Index");
        assert_eq!(extract_title("content/iPhone-tips.md"), "IPhone Tips");
    }

    #[test]
    fn test_title_case_separators() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("rock'n'roll"), "Rock'N'Roll");
        assert_eq!(title_case("über cool"), "Über Cool");
        assert_eq!(title_case("v2 notes"), "V2 Notes");
    }
}
