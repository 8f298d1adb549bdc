//! Dispatch over page dynamic-zone components.

use tracing::warn;
use xp_cms::models::PageComponent;
use xp_markdown::MarkdownRenderer;

use crate::content::{render_image_with_title, render_listing, render_quote, render_text};
use crate::context::SiteContext;
use crate::hero::render_hero;
use crate::mission::render_mission;

/// Render one component. Unknown component types render as nothing.
#[must_use]
pub fn render_component(
    ctx: &SiteContext,
    component: &PageComponent,
    renderer: &MarkdownRenderer,
) -> String {
    match component {
        PageComponent::Hero(hero) => render_hero(ctx, hero),
        PageComponent::Mission(mission) => render_mission(mission),
        PageComponent::Text(text) => render_text(text, renderer),
        PageComponent::Quote(quote) => render_quote(quote),
        PageComponent::ImageWithTitle(block) => render_image_with_title(ctx, block),
        PageComponent::Listing(listing) => render_listing(ctx, listing),
        PageComponent::Unknown => {
            warn!(site = %ctx.site_id, "Skipping unknown page component");
            String::new()
        }
    }
}

/// Render components in order.
#[must_use]
pub fn render_components(
    ctx: &SiteContext,
    components: &[PageComponent],
    renderer: &MarkdownRenderer,
) -> String {
    components
        .iter()
        .map(|component| render_component(ctx, component, renderer))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_renders_in_order_and_skips_unknown() {
        let components: Vec<PageComponent> = serde_json::from_value(json!([
            {"__component": "ui.quote", "quote": "Eerst"},
            {"__component": "ui.carousel", "slides": []},
            {"__component": "ui.text", "content": "Daarna"}
        ]))
        .unwrap();
        let html = render_components(&SiteContext::test(), &components, &MarkdownRenderer::default());
        let first = html.find("Eerst").unwrap();
        let second = html.find("Daarna").unwrap();
        assert!(first < second);
        assert!(!html.contains("carousel"));
    }
}
