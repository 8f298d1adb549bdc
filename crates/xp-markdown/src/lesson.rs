//! Lesson files.
//!
//! A lesson is a markdown file with optional YAML front matter:
//!
//! ```text
//! ---
//! title: Variables
//! languages: [csharp, python, go]
//! section: Basis
//! order: 2
//! ---
//! # Variables
//! ...
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::render::{MarkdownRenderer, Rendered};

/// Error loading a lesson.
#[derive(Debug, thiserror::Error)]
pub enum LessonError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Lesson '{slug}' has front matter without a closing '---'")]
    UnclosedFrontMatter { slug: String },
    #[error("Invalid front matter in lesson '{slug}': {source}")]
    FrontMatter {
        slug: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Programming language a lesson is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonLanguage {
    Csharp,
    Python,
    Go,
}

impl LessonLanguage {
    /// Code fence tag.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Csharp => "csharp",
            Self::Python => "python",
            Self::Go => "go",
        }
    }
}

impl fmt::Display for LessonLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Front matter fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LessonMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub languages: Vec<LessonLanguage>,
    /// Section name; lessons are grouped by it.
    pub section: String,
    pub order: u32,
}

/// A rendered lesson.
#[derive(Debug, Clone)]
pub struct Lesson {
    /// File stem.
    pub slug: String,
    pub meta: LessonMeta,
    pub rendered: Rendered,
}

impl Lesson {
    /// Parse a lesson from its markdown source.
    ///
    /// # Errors
    ///
    /// Returns an error for unterminated or invalid front matter.
    pub fn from_source(
        slug: &str,
        source: &str,
        renderer: &MarkdownRenderer,
    ) -> Result<Self, LessonError> {
        let (meta, body) = split_front_matter(slug, source)?;
        let rendered = renderer.render(body);
        for warning in &rendered.warnings {
            warn!(lesson = slug, "{warning}");
        }
        Ok(Self {
            slug: slug.to_owned(),
            meta,
            rendered,
        })
    }

    /// Display title: front matter, then first heading, then slug.
    #[must_use]
    pub fn title(&self) -> &str {
        self.meta
            .title
            .as_deref()
            .or(self.rendered.title.as_deref())
            .unwrap_or(&self.slug)
    }

    fn sort_key(&self) -> (&str, u32, &str) {
        (&self.meta.section, self.meta.order, &self.slug)
    }
}

fn split_front_matter<'a>(slug: &str, source: &'a str) -> Result<(LessonMeta, &'a str), LessonError> {
    let Some(rest) = source
        .strip_prefix("---\n")
        .or_else(|| source.strip_prefix("---\r\n"))
    else {
        return Ok((LessonMeta::default(), source));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            let meta = if yaml.trim().is_empty() {
                LessonMeta::default()
            } else {
                serde_yaml::from_str(yaml).map_err(|source| LessonError::FrontMatter {
                    slug: slug.to_owned(),
                    source,
                })?
            };
            return Ok((meta, body));
        }
        offset += line.len();
    }

    Err(LessonError::UnclosedFrontMatter {
        slug: slug.to_owned(),
    })
}

/// Load every `*.md` file of `dir` (not recursive), ordered by section,
/// order and slug.
///
/// # Errors
///
/// Returns the first read or front matter error.
pub fn load_lessons(dir: &Path, renderer: &MarkdownRenderer) -> Result<Vec<Lesson>, LessonError> {
    let io_error = |source: std::io::Error| LessonError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(io_error)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|e| e == "md"))
        .collect();
    paths.sort();

    let mut lessons = Vec::with_capacity(paths.len());
    for path in paths {
        let source = std::fs::read_to_string(&path).map_err(|source| LessonError::Io {
            path: path.clone(),
            source,
        })?;
        let slug = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        lessons.push(Lesson::from_source(&slug, &source, renderer)?);
    }

    sort_lessons(&mut lessons);
    debug!(dir = %dir.display(), count = lessons.len(), "Lessons loaded");
    Ok(lessons)
}

/// Sort by `(section, order)`, slug breaking ties.
pub fn sort_lessons(lessons: &mut [Lesson]) {
    lessons.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lesson(slug: &str, source: &str) -> Result<Lesson, LessonError> {
        Lesson::from_source(slug, source, &MarkdownRenderer::default())
    }

    #[test]
    fn test_front_matter_parsed() {
        let source = "---\ntitle: Variabelen\nlanguages: [csharp, go]\nsection: Basis\norder: 3\n---\n# Heading\n\nText\n";
        let lesson = lesson("variables", source).unwrap();
        assert_eq!(
            lesson.meta,
            LessonMeta {
                title: Some("Variabelen".to_owned()),
                description: None,
                languages: vec![LessonLanguage::Csharp, LessonLanguage::Go],
                section: "Basis".to_owned(),
                order: 3,
            }
        );
        assert_eq!(lesson.title(), "Variabelen");
        assert!(lesson.rendered.html.starts_with("<h1>Heading</h1>"));
    }

    #[test]
    fn test_no_front_matter() {
        let lesson = lesson("intro", "# Welkom\n").unwrap();
        assert_eq!(lesson.meta, LessonMeta::default());
        assert_eq!(lesson.title(), "Welkom");
    }

    #[test]
    fn test_title_falls_back_to_slug() {
        assert_eq!(lesson("loops", "text only\n").unwrap().title(), "loops");
    }

    #[test]
    fn test_unknown_language_rejected() {
        let err = lesson("x", "---\nlanguages: [cobol]\n---\n").unwrap_err();
        assert!(matches!(err, LessonError::FrontMatter { .. }));
        assert!(err.to_string().contains("lesson 'x'"));
    }

    #[test]
    fn test_extra_front_matter_keys_ignored() {
        let lesson = lesson("x", "---\ntitle: X\ndraft: true\nsection: Basis\n---\n# X\n").unwrap();
        assert_eq!(lesson.meta.title.as_deref(), Some("X"));
        assert_eq!(lesson.meta.section, "Basis");
    }

    #[test]
    fn test_unclosed_front_matter() {
        let err = lesson("x", "---\ntitle: x\n").unwrap_err();
        assert!(matches!(err, LessonError::UnclosedFrontMatter { .. }));
    }

    #[test]
    fn test_empty_front_matter() {
        let lesson = lesson("x", "---\n---\nbody\n").unwrap();
        assert_eq!(lesson.meta, LessonMeta::default());
        assert_eq!(lesson.rendered.html, "<p>body</p>");
    }

    #[test]
    fn test_load_lessons_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("b.md"),
            "---\nsection: Lussen\norder: 1\n---\n# B\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("a.md"),
            "---\nsection: Lussen\norder: 2\n---\n# A\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("c.md"),
            "---\nsection: Basis\norder: 9\n---\n# C\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let lessons = load_lessons(dir.path(), &MarkdownRenderer::default()).unwrap();
        let slugs: Vec<_> = lessons.iter().map(|l| l.slug.as_str()).collect();
        assert_eq!(slugs, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_load_lessons_missing_dir() {
        let err = load_lessons(Path::new("/nonexistent/lessons"), &MarkdownRenderer::default())
            .unwrap_err();
        assert!(matches!(err, LessonError::Io { .. }));
    }
}
