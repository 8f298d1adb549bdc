//! Social media links.

use serde::Deserialize;

use super::Image;

/// Social media profile shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Social {
    pub title: String,
    pub link: String,
    #[serde(default = "enabled_by_default")]
    pub is_enabled: bool,
    #[serde(default)]
    pub icon: Option<Image>,
}

fn enabled_by_default() -> bool {
    true
}

/// Profiles that should be shown.
pub fn enabled_socials(socials: &[Social]) -> impl Iterator<Item = &Social> {
    socials.iter().filter(|s| s.is_enabled)
}
