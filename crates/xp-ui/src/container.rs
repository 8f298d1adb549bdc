//! Centered content container.

/// Wrap `inner` in the standard page container.
#[must_use]
pub fn render_container(inner: &str) -> String {
    format!(
        "<div class=\"overflow-hidden\">\
         <div class=\"mx-auto max-w-7xl px-6 pb-32 pt-36 sm:pt-60 lg:px-8 lg:pt-32\">\
         <div class=\"mx-auto max-w-2xl gap-x-14 lg:mx-0 lg:flex lg:max-w-none lg:items-center\">\
         {inner}</div></div></div>\n"
    )
}
