//! Front-matter parsing for documentation pages.
//!
//! Pages carry an optional block of flat `key: value` pairs between two `---`
//! lines:
//!
//! ```text
//! ---
//! title: Button
//! section: components
//! ---
//! <h1>{{title}}</h1>
//! ```
//!
//! There is no nesting, quoting or escaping. Values are taken verbatim after
//! trimming.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

/// Front-matter delimiter line.
pub const DELIMITER: &str = "---";

static FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+):\s*(.+)$").expect("valid field regex"));

/// Flat key/value metadata extracted from a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: IndexMap<String, String>,
}

impl FrontMatter {
    /// Create empty front matter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Get a field value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in the order they first appeared.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Split page text into front matter and body.
///
/// The first `---` line opens the block and the second closes it. Lines
/// outside the block, including any before it, form the body. Any further
/// `---` lines are ordinary body lines.
pub fn parse_front_matter(content: &str) -> (FrontMatter, String) {
    let mut meta = FrontMatter::new();
    let mut body = Vec::new();
    let mut delimiters_seen = 0;

    for line in content.split('\n') {
        if delimiters_seen < 2 && line.trim() == DELIMITER {
            delimiters_seen += 1;
            continue;
        }

        if delimiters_seen == 1 {
            if let Some(caps) = FIELD_RE.captures(line) {
                meta.insert(caps[1].trim(), caps[2].trim());
            }
        } else {
            body.push(line);
        }
    }

    (meta, body.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_front_matter() {
        let content = "---\ntitle: Button\ndescription: Clickable actions\n---\n<h1>{{title}}</h1>";

        let (meta, body) = parse_front_matter(content);

        assert_eq!(meta.get("title"), Some("Button"));
        assert_eq!(meta.get("description"), Some("Clickable actions"));
        assert_eq!(meta.len(), 2);
        assert_eq!(body, "<h1>{{title}}</h1>");
    }

    #[test]
    fn test_no_front_matter() {
        let content = "<p>plain</p>\n<p>page</p>";

        let (meta, body) = parse_front_matter(content);

        assert!(meta.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_values_keep_inner_colons() {
        let content = "---\ntitle: Docs: Getting Started\n---\nbody";

        let (meta, _) = parse_front_matter(content);

        assert_eq!(meta.get("title"), Some("Docs: Getting Started"));
    }

    #[test]
    fn test_non_field_lines_are_ignored() {
        let content = "---\ntitle: Card\n  nested: no\nnot a field\nkey-with-dash: skipped\nempty:\n---\nbody";

        let (meta, body) = parse_front_matter(content);

        assert_eq!(meta.len(), 1);
        assert_eq!(meta.get("title"), Some("Card"));
        assert!(meta.get("empty").is_none());
        assert_eq!(body, "body");
    }

    #[test]
    fn test_only_first_two_delimiters_count() {
        let content = "---\ntitle: Separator\n---\n<p>above</p>\n---\n<p>below</p>";

        let (meta, body) = parse_front_matter(content);

        assert_eq!(meta.get("title"), Some("Separator"));
        assert_eq!(body, "<p>above</p>\n---\n<p>below</p>");
    }

    #[test]
    fn test_lines_before_block_are_body() {
        let content = "<!-- preamble -->\n---\nlayout: docs\n---\n<main></main>";

        let (meta, body) = parse_front_matter(content);

        assert_eq!(meta.get("layout"), Some("docs"));
        assert_eq!(body, "<!-- preamble -->\n<main></main>");
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let content = "---\ntitle: First\ntitle: Second\n---\n";

        let (meta, body) = parse_front_matter(content);

        assert_eq!(meta.get("title"), Some("Second"));
        assert_eq!(meta.len(), 1);
        assert_eq!(body, "");
    }

    #[test]
    fn test_unclosed_block_swallows_rest() {
        let content = "---\ntitle: Open\n<p>never body</p>";

        let (meta, body) = parse_front_matter(content);

        assert_eq!(meta.get("title"), Some("Open"));
        assert_eq!(body, "");
    }
}
