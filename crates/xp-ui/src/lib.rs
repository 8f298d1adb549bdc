//! Presentational components for XP websites.
//!
//! Every component is a pure function from content models plus a
//! [`SiteContext`] to an HTML string. Page-level helpers in [`page`] wrap
//! component output in a full document with SEO metadata.

mod blog;
mod components;
mod container;
mod content;
mod context;
mod footer;
mod header;
mod hero;
mod mission;
pub mod page;
pub mod radar;
pub mod seo;
pub mod structured_data;
mod team;

pub use blog::{article_path, render_blog_card, render_blog_listing};
pub use components::{render_component, render_components};
pub use container::render_container;
pub use content::{render_image_with_title, render_listing, render_quote, render_text};
pub use context::SiteContext;
pub use footer::render_footer;
pub use header::{LOGO_PATH, MenuState, render_header};
pub use hero::render_hero;
pub use mission::render_mission;
pub use page::{
    Layout, render_article_page, render_cms_page, render_markdown_page, render_page,
};
pub use seo::{SeoData, SeoOptions, generate_article_seo_data, generate_seo_data};
pub use team::render_team;
