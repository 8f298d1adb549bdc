//! Site header with desktop navigation and a mobile menu.

use std::fmt::Write;

use xp_cms::models::NavLink;
use xp_markdown::escape_html;

use crate::context::SiteContext;

/// Site logo path.
pub const LOGO_PATH: &str = "/images/logo.svg";

/// Mobile menu visibility, owned by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Render the header.
///
/// The mobile menu is always emitted; `menu` decides whether it starts
/// visible.
#[must_use]
pub fn render_header(ctx: &SiteContext, navigation: &[NavLink], menu: MenuState) -> String {
    let site_name = escape_html(&ctx.site_name);
    let mut html = String::with_capacity(2048);

    html.push_str("<header class=\"absolute inset-x-0 top-0 z-50\">\n");
    html.push_str(
        "<nav class=\"mx-auto flex max-w-7xl items-center justify-between p-6 lg:px-8\" \
         aria-label=\"Global\">\n",
    );
    let _ = writeln!(
        html,
        "<div class=\"flex lg:flex-1\"><a href=\"/\" class=\"-m-1.5 p-1.5\">\
         <span class=\"sr-only\">{site_name}</span>\
         <img class=\"h-8 w-auto\" src=\"{LOGO_PATH}\" alt=\"{site_name} Logo\"></a></div>"
    );
    let _ = writeln!(
        html,
        "<div class=\"flex lg:hidden\"><button type=\"button\" class=\"menu-toggle\" \
         aria-controls=\"mobile-menu\" aria-expanded=\"{}\">\
         <span class=\"sr-only\">Open menu</span></button></div>",
        menu.is_open()
    );
    html.push_str("<div class=\"hidden lg:flex lg:gap-x-12\">\n");
    for item in navigation {
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"text-sm font-semibold leading-6 text-primary-800\">{}</a>",
            escape_html(&item.href),
            escape_html(&item.name)
        );
    }
    html.push_str("</div>\n</nav>\n");

    let hidden = if menu.is_open() { "" } else { " hidden" };
    let _ = writeln!(
        html,
        "<div id=\"mobile-menu\" class=\"lg:hidden{hidden}\" role=\"dialog\" aria-modal=\"true\">"
    );
    html.push_str("<div class=\"space-y-2 py-6\">\n");
    for item in navigation {
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"-mx-3 block rounded-lg px-3 py-2 text-base font-semibold\">{}</a>",
            escape_html(&item.href),
            escape_html(&item.name)
        );
    }
    html.push_str("</div>\n</div>\n</header>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> Vec<NavLink> {
        vec![
            NavLink {
                name: "Diensten".to_owned(),
                href: "/diensten".to_owned(),
            },
            NavLink {
                name: "Over & ons".to_owned(),
                href: "/over-ons".to_owned(),
            },
        ]
    }

    #[test]
    fn test_menu_state_toggle() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
        menu.open();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_header_lists_navigation_twice() {
        let html = render_header(&SiteContext::test(), &nav(), MenuState::default());
        assert_eq!(html.matches("href=\"/diensten\"").count(), 2);
        assert!(html.contains("Over &amp; ons"));
        assert!(html.contains("class=\"lg:hidden hidden\""));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[test]
    fn test_header_open_menu() {
        let mut menu = MenuState::default();
        menu.open();
        let html = render_header(&SiteContext::test(), &nav(), menu);
        assert!(html.contains("id=\"mobile-menu\" class=\"lg:hidden\""));
        assert!(html.contains("aria-expanded=\"true\""));
    }

    #[test]
    fn test_header_empty_navigation() {
        let html = render_header(&SiteContext::test(), &[], MenuState::default());
        assert!(html.contains("<header"));
        assert!(!html.contains("text-primary-800\">"));
    }
}
