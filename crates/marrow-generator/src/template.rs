//! Component template loading.
//!
//! A component template is an HTML file with a short comment header followed
//! by a body that may be split into named sections:
//!
//! ```text
//! <!-- Marrow UI: Button -->
//! <!-- Clickable actions -->
//! <!-- Requires: Tailwind CSS, Alpine.js, marrow.css, marrow.js -->
//!
//! <!-- @section: Default -->
//! <button class="mw-btn mw-btn-primary">Save</button>
//! <!-- @section: Outline -->
//! <button class="mw-btn mw-btn-outline">Cancel</button>
//! ```

use std::{
    fs, io,
    path::PathBuf,
    sync::LazyLock,
};

use indexmap::IndexMap;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// Every header line starts with this.
pub const HEADER_PREFIX: &str = "<!-- ";

/// Opening text of a section marker.
pub const SECTION_TOKEN: &str = "<!-- @section:";

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^<!-- @section:\s*(.+?)\s*-->$").expect("valid marker regex")
});

static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!-- @section:\s*.+?\s*-->\n?").expect("valid strip regex")
});

/// Template loading errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template file does not exist.
    #[error("template not found: {name} ({})", .path.display())]
    NotFound { name: String, path: PathBuf },

    /// Template file could not be read.
    #[error("failed to read template {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Requested section is not in the template.
    #[error(
        "Section \"{section}\" not found in template \"{template}\". Available: {}",
        .available.join(", ")
    )]
    SectionNotFound {
        template: String,
        section: String,
        available: Vec<String>,
    },
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// A split component template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    /// Section name to trimmed content, in marker order.
    pub sections: IndexMap<String, String>,

    /// Header-stripped body with every marker removed.
    pub full: String,
}

impl Template {
    /// Get a section by name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&str> {
        self.sections.get(name).map(String::as_str)
    }

    /// Section names in order.
    #[must_use]
    pub fn section_names(&self) -> Vec<String> {
        self.sections.keys().cloned().collect()
    }
}

/// Strip the leading comment header and the blank line that follows it.
///
/// A template made only of comment lines has no recognisable header end and
/// is returned unchanged.
fn strip_header(raw: &str) -> &str {
    let mut offset = 0;
    for line in raw.split('\n') {
        if line.starts_with(HEADER_PREFIX) {
            offset += line.len() + 1;
            continue;
        }
        if line.trim().is_empty() {
            offset += line.len() + 1;
        }
        return &raw[offset.min(raw.len())..];
    }
    raw
}

/// Start of the last section token beginning at or before `from`.
fn last_token_at_or_before(body: &str, from: usize) -> Option<usize> {
    body.match_indices(SECTION_TOKEN)
        .map(|(idx, _)| idx)
        .take_while(|&idx| idx <= from)
        .last()
}

/// Split raw template text into sections and a marker-free body.
///
/// A section ends where a backward search from the end of the next marker
/// finds the section token. Marker text embedded in a marker's own name
/// therefore shortens the preceding section.
#[must_use]
pub fn split_template(raw: &str) -> Template {
    let body = strip_header(raw);

    let markers: Vec<(String, usize)> = MARKER_RE
        .captures_iter(body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some((caps[1].to_string(), whole.end()))
        })
        .collect();

    let mut sections = IndexMap::new();
    for (i, (name, start)) in markers.iter().enumerate() {
        let end = match markers.get(i + 1) {
            Some((_, next_end)) => last_token_at_or_before(body, *next_end).unwrap_or(*next_end),
            None => body.len(),
        };
        let content = body[*start..end.max(*start)].trim().to_string();
        sections.insert(name.clone(), content);
    }

    let full = STRIP_RE.replace_all(body, "").trim().to_string();

    Template { sections, full }
}

/// Loads component templates from a directory of `<name>.html` files.
#[derive(Debug, Clone)]
pub struct TemplateLoader {
    dir: PathBuf,
}

impl TemplateLoader {
    /// Create a loader rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the template file for `name`.
    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.html"))
    }

    /// Sorted names of all templates in the directory.
    ///
    /// A missing directory yields an empty list.
    pub fn available(&self) -> Result<Vec<String>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|source| TemplateError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "html"))
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .collect();
        names.sort();
        Ok(names)
    }

    /// Read the raw template text.
    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.path_for(name);
        fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                TemplateError::NotFound {
                    name: name.to_string(),
                    path,
                }
            } else {
                TemplateError::Io { path, source }
            }
        })
    }

    /// Load and split a template.
    pub fn load(&self, name: &str) -> Result<Template> {
        let raw = self.read(name)?;
        let template = split_template(&raw);
        debug!(
            name,
            sections = template.sections.len(),
            "loaded template"
        );
        Ok(template)
    }

    /// Load a single named section.
    pub fn load_section(&self, name: &str, section: &str) -> Result<String> {
        let mut template = self.load(name)?;
        match template.sections.swap_remove(section) {
            Some(content) => Ok(content),
            None => Err(TemplateError::SectionNotFound {
                template: name.to_string(),
                section: section.to_string(),
                available: template.section_names(),
            }),
        }
    }

    /// Load the full marker-free body.
    pub fn load_full(&self, name: &str) -> Result<String> {
        Ok(self.load(name)?.full)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const HEADER: &str = "<!-- Marrow UI: Button -->\n<!-- Clickable actions -->\n<!-- Requires: Tailwind CSS, Alpine.js, marrow.css, marrow.js -->\n\n";

    fn normalize(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_strip_header() {
        let raw = format!("{HEADER}<button>Save</button>\n");
        assert_eq!(strip_header(&raw), "<button>Save</button>\n");
    }

    #[test]
    fn test_strip_header_without_header() {
        let raw = "<div>no header</div>\n<p>x</p>";
        assert_eq!(strip_header(raw), raw);
    }

    #[test]
    fn test_strip_header_without_blank_line() {
        let raw = "<!-- Marrow UI: Card -->\n<div class=\"mw-card\"></div>";
        assert_eq!(strip_header(raw), "<div class=\"mw-card\"></div>");
    }

    #[test]
    fn test_strip_header_only_comments() {
        let raw = "<!-- Marrow UI: Empty -->\n<!-- nothing here -->";
        assert_eq!(strip_header(raw), raw);
    }

    #[test]
    fn test_zero_markers() {
        let raw = format!("{HEADER}  <button class=\"mw-btn\">Go</button>\n\n");

        let template = split_template(&raw);

        assert!(template.sections.is_empty());
        assert_eq!(template.full, "<button class=\"mw-btn\">Go</button>");
    }

    #[test]
    fn test_sections_split_in_order() {
        let raw = format!(
            "{HEADER}<!-- @section: Default -->\n<button>Save</button>\n\n<!-- @section: Outline -->\n<button class=\"outline\">Cancel</button>\n"
        );

        let template = split_template(&raw);

        assert_eq!(template.section_names(), vec!["Default", "Outline"]);
        assert_eq!(template.section("Default"), Some("<button>Save</button>"));
        assert_eq!(
            template.section("Outline"),
            Some("<button class=\"outline\">Cancel</button>")
        );
        assert_eq!(
            template.full,
            "<button>Save</button>\n\n<button class=\"outline\">Cancel</button>"
        );
    }

    #[test]
    fn test_crlf_sections_split() {
        let raw = "<!-- Marrow UI: Button -->\r\n\r\n<!-- @section: Primary -->\r\n<button>Save</button>\r\n\r\n<!-- @section: Ghost -->\r\n<button class=\"ghost\">Skip</button>\r\n";

        let template = split_template(raw);

        assert_eq!(template.section_names(), vec!["Primary", "Ghost"]);
        assert_eq!(template.section("Primary"), Some("<button>Save</button>"));
        assert_eq!(
            template.section("Ghost"),
            Some("<button class=\"ghost\">Skip</button>")
        );
    }

    #[test]
    fn test_marker_name_whitespace_is_trimmed() {
        let raw = "<p>intro</p>\n<!-- @section:   With Icon   -->\n<svg></svg>";

        let template = split_template(raw);

        assert_eq!(template.section("With Icon"), Some("<svg></svg>"));
        assert_eq!(template.full, "<p>intro</p>\n<svg></svg>");
    }

    #[test]
    fn test_rejoined_sections_match_full() {
        let raw = format!(
            "{HEADER}<!-- @section: One -->\n<div>1</div>\n<!-- @section: Two -->\n  <div>2</div>\n\n<!-- @section: Three -->\n<div>3</div>\n<span>end</span>\n"
        );

        let template = split_template(&raw);
        let rejoined = template
            .sections
            .values()
            .cloned()
            .collect::<Vec<_>>()
            .join("\n");

        assert_eq!(template.sections.len(), 3);
        assert_eq!(normalize(&rejoined), normalize(&template.full));
    }

    #[test]
    fn test_duplicate_names_keep_first_position_last_content() {
        let raw = "<!-- x -->\n\n<!-- @section: A -->\na1\n<!-- @section: B -->\nb\n<!-- @section: A -->\na2";

        let template = split_template(raw);

        assert_eq!(template.section_names(), vec!["A", "B"]);
        assert_eq!(template.section("A"), Some("a2"));
        assert_eq!(template.section("B"), Some("b"));
    }

    #[test]
    fn test_inline_token_in_content_is_kept() {
        let raw = "<!-- h -->\n\n<!-- @section: A -->\ntext <!-- @section: inline\n<!-- @section: B -->\nb";

        let template = split_template(raw);

        assert_eq!(template.section("A"), Some("text <!-- @section: inline"));
        assert_eq!(template.section("B"), Some("b"));
    }

    #[test]
    fn test_token_inside_marker_name_shortens_previous_section() {
        let raw = "<!-- h -->\n\n<!-- @section: A -->\na\n<!-- @section: B <!-- @section: C -->\nc";

        let template = split_template(raw);

        assert_eq!(template.section("A"), Some("a\n<!-- @section: B"));
        assert_eq!(template.section("B <!-- @section: C"), Some("c"));
        assert_eq!(template.full, "a\nc");
    }

    #[test]
    fn test_indented_marker_is_not_a_section() {
        let raw = "<!-- h -->\n\n<div>\n  <!-- @section: Nested -->\n</div>";

        let template = split_template(raw);

        assert!(template.sections.is_empty());
        assert_eq!(template.full, "<div>\n  </div>");
    }

    fn loader_with(files: &[(&str, &str)]) -> (TempDir, TemplateLoader) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let loader = TemplateLoader::new(dir.path());
        (dir, loader)
    }

    #[test]
    fn test_loader_load_section() {
        let button = format!(
            "{HEADER}<!-- @section: Default -->\n<button>Save</button>\n<!-- @section: Variants -->\n<button>Ghost</button>\n"
        );
        let (_dir, loader) = loader_with(&[("button.html", button.as_str())]);

        assert_eq!(
            loader.load_section("button", "Variants").unwrap(),
            "<button>Ghost</button>"
        );
        assert_eq!(
            loader.load_full("button").unwrap(),
            "<button>Save</button>\n<button>Ghost</button>"
        );
    }

    #[test]
    fn test_missing_section_lists_available() {
        let button = format!(
            "{HEADER}<!-- @section: Default -->\n<button>Save</button>\n<!-- @section: Variants -->\n<button>Ghost</button>\n"
        );
        let (_dir, loader) = loader_with(&[("button.html", button.as_str())]);

        let err = loader.load_section("button", "Usage").unwrap_err();

        assert!(matches!(err, TemplateError::SectionNotFound { .. }));
        assert_eq!(
            err.to_string(),
            "Section \"Usage\" not found in template \"button\". Available: Default, Variants"
        );
    }

    #[test]
    fn test_missing_template_reports_path() {
        let (dir, loader) = loader_with(&[]);

        let err = loader.load("dialog").unwrap_err();

        assert!(matches!(err, TemplateError::NotFound { .. }));
        let expected = dir.path().join("dialog.html");
        assert!(err.to_string().contains(&expected.display().to_string()));
    }

    #[test]
    fn test_available_is_sorted_html_only() {
        let (_dir, loader) = loader_with(&[
            ("tabs.html", "x"),
            ("button.html", "x"),
            ("notes.txt", "x"),
            ("card.html", "x"),
        ]);

        assert_eq!(loader.available().unwrap(), vec!["button", "card", "tabs"]);
    }

    #[test]
    fn test_available_missing_dir_is_empty() {
        let loader = TemplateLoader::new("/nonexistent/templates/components");
        assert!(loader.available().unwrap().is_empty());
    }
}
