//! Site-level rendering context.

use xp_cms::models::Image;
use xp_config::Config;

/// Configuration every component may need, passed explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    /// Site identifier used in CMS filters.
    pub site_id: String,
    /// Human-readable site name.
    pub site_name: String,
    /// Public site URL without trailing slash.
    pub site_url: String,
    /// Asset host for CMS uploads.
    pub images_url: String,
    /// OpenGraph locale, e.g. `nl_NL`.
    pub locale: String,
    pub theme_color: String,
}

impl SiteContext {
    /// Build from loaded configuration.
    ///
    /// Images resolve against [`Config::images_url`].
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let site_url = config.site.url.trim_end_matches('/').to_owned();
        let images_url = config.images_url().trim_end_matches('/').to_owned();
        Self {
            site_id: config.site.id.clone(),
            site_name: config.site.name.clone(),
            site_url,
            images_url,
            locale: config.site.locale.clone(),
            theme_color: config.site.theme_color.clone(),
        }
    }

    /// Absolute URL of a CMS image.
    #[must_use]
    pub fn image_url(&self, image: &Image) -> String {
        image.resolve_url(&self.images_url)
    }

    /// Absolute URL of a site path.
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        if path.is_empty() || path == "/" {
            return self.site_url.clone();
        }
        format!("{}/{}", self.site_url, path.trim_start_matches('/'))
    }

    #[cfg(test)]
    pub(crate) fn test() -> Self {
        Self {
            site_id: "landing".to_owned(),
            site_name: "XPRTZ".to_owned(),
            site_url: "https://xprtz.net".to_owned(),
            images_url: "https://cms.xprtz.net".to_owned(),
            locale: "nl_NL".to_owned(),
            theme_color: "#1e40af".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use xp_config::CmsConfig;

    #[test]
    fn test_from_config_uses_cms_images_url() {
        let mut config = Config::default();
        config.site.url = "https://cloud.xprtz.net/".to_owned();
        let mut cms = CmsConfig::new("https://cms.xprtz.net");
        cms.images_url = Some("https://img.xprtz.net".to_owned());
        config.cms = Some(cms);

        let ctx = SiteContext::from_config(&config);
        assert_eq!(ctx.site_url, "https://cloud.xprtz.net");
        assert_eq!(ctx.images_url, "https://img.xprtz.net");
        assert_eq!(ctx.site_id, "no-site-found");
    }

    #[test]
    fn test_from_config_without_cms() {
        let ctx = SiteContext::from_config(&Config::default());
        assert_eq!(ctx.images_url, ctx.site_url);
    }

    #[test]
    fn test_from_config_site_images_url_without_cms() {
        let mut config = Config::default();
        config.site.images_url = Some("https://assets.xprtz.net/".to_owned());
        let ctx = SiteContext::from_config(&config);
        assert_eq!(ctx.images_url, "https://assets.xprtz.net");
    }

    #[test]
    fn test_absolute_url() {
        let ctx = SiteContext::test();
        assert_eq!(ctx.absolute_url("/artikelen/x"), "https://xprtz.net/artikelen/x");
        assert_eq!(ctx.absolute_url("/"), "https://xprtz.net");
    }
}
