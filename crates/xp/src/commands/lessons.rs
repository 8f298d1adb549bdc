//! `xp lessons` command implementation.

use std::fmt::Write;
use std::path::PathBuf;

use clap::Args;
use xp_markdown::{Lesson, LessonLanguage, escape_html, load_lessons};
use xp_ui::{Layout, SiteContext, render_markdown_page};

use super::{SiteArgs, markdown_renderer, page_file, write_page};
use crate::error::CliError;
use crate::output::Output;

/// Site path lesson pages are published under.
const LESSONS_PATH: &str = "/lessen";

/// Arguments for the lessons command.
#[derive(Args)]
pub(crate) struct LessonsArgs {
    /// Lesson directory (overrides config `content.source_dir`).
    dir: Option<PathBuf>,

    /// Output directory for rendered pages (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    #[command(flatten)]
    site: SiteArgs,
}

impl LessonsArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load(self.dir, self.output_dir)?;
        let source_dir = &config.content_resolved.source_dir;
        let output_dir = &config.content_resolved.output_dir;

        output.info(&format!("Source: {}", source_dir.display()));
        output.info(&format!("Output: {}", output_dir.display()));

        let renderer = markdown_renderer(&config);
        let lessons = load_lessons(source_dir, &renderer)?;
        if lessons.is_empty() {
            output.warning("No lessons found");
            return Ok(());
        }

        let ctx = SiteContext::from_config(&config);
        let layout = Layout::new(&[], &[]);
        for lesson in &lessons {
            let path = lesson_path(lesson);
            let description = lesson.meta.description.as_deref().unwrap_or(lesson.title());
            let html = render_markdown_page(
                &ctx,
                &layout,
                lesson.title(),
                description,
                &path,
                &lesson.rendered.html,
            );
            write_page(&page_file(output_dir, &path)?, &html)?;
        }

        let index = render_markdown_page(
            &ctx,
            &layout,
            "Lessen",
            "Alle lessen",
            LESSONS_PATH,
            &render_index(&lessons),
        );
        write_page(&page_file(output_dir, LESSONS_PATH)?, &index)?;

        output.success(&format!(
            "Rendered {} lessons to {}",
            lessons.len(),
            output_dir.display()
        ));
        Ok(())
    }
}

fn lesson_path(lesson: &Lesson) -> String {
    format!("{LESSONS_PATH}/{}", lesson.slug)
}

/// Lesson list grouped by section, in lesson order.
fn render_index(lessons: &[Lesson]) -> String {
    let mut html = String::from("<h1>Lessen</h1>\n");
    let mut section: Option<&str> = None;
    for lesson in lessons {
        if section != Some(lesson.meta.section.as_str()) {
            if section.is_some() {
                html.push_str("</ol>\n");
            }
            let _ = write!(html, "<h2>{}</h2>\n<ol>", escape_html(&lesson.meta.section));
            section = Some(lesson.meta.section.as_str());
        }
        let _ = write!(
            html,
            "<li><a href=\"{}\">{}</a>",
            escape_html(&lesson_path(lesson)),
            escape_html(lesson.title())
        );
        if !lesson.meta.languages.is_empty() {
            let languages: Vec<&str> = lesson.meta.languages.iter().copied().map(LessonLanguage::tag).collect();
            let _ = write!(
                html,
                " <span class=\"lesson-languages\">{}</span>",
                languages.join(", ")
            );
        }
        html.push_str("</li>");
    }
    html.push_str("</ol>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use xp_markdown::MarkdownRenderer;

    fn lesson(slug: &str, source: &str) -> Lesson {
        Lesson::from_source(slug, source, &MarkdownRenderer::default()).unwrap()
    }

    #[test]
    fn test_render_index_groups_sections() {
        let lessons = vec![
            lesson("intro", "---\nsection: Basis\nlanguages: [go, python]\n---\n# Intro\n"),
            lesson("loops", "---\nsection: Herhaling\n---\n# Lussen\n"),
        ];
        assert_eq!(
            render_index(&lessons),
            "<h1>Lessen</h1>\n\
             <h2>Basis</h2>\n<ol><li><a href=\"/lessen/intro\">Intro</a> \
             <span class=\"lesson-languages\">go, python</span></li>\
             </ol>\n\
             <h2>Herhaling</h2>\n<ol><li><a href=\"/lessen/loops\">Lussen</a></li></ol>\n"
        );
    }
}
