//! `${VAR}` and `${VAR:-default}` expansion for configuration strings.

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// `${VAR}` fails when `VAR` is unset, `${VAR:-default}` falls back to
/// `default`. Bare `$VAR` is left alone so literal dollar signs in URLs survive.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.0),
    })
}

/// Expand an optional value in place.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(raw) = value.as_deref() {
        *value = Some(expand_env(raw, field)?);
    }
    Ok(())
}

/// Name of the variable that could not be resolved.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_passes_through() {
        let result = expand_env("https://cms.example.com", "cms.base_url").unwrap();
        assert_eq!(result, "https://cms.example.com");
    }

    #[test]
    fn test_site_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("XP_EXPAND_SITE", "learning");
        }
        let result = expand_env("${XP_EXPAND_SITE}", "site.id").unwrap();
        assert_eq!(result, "learning");
        unsafe {
            std::env::remove_var("XP_EXPAND_SITE");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("XP_EXPAND_UNSET");
        }
        let result = expand_env("${XP_EXPAND_UNSET:-no-site-found}", "site.id").unwrap();
        assert_eq!(result, "no-site-found");
    }

    #[test]
    fn test_missing_variable_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("XP_EXPAND_MISSING");
        }
        let err = expand_env("${XP_EXPAND_MISSING}", "cms.token").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let msg = err.to_string();
        assert!(msg.contains("XP_EXPAND_MISSING"));
        assert!(msg.contains("cms.token"));
    }

    #[test]
    fn test_embedded_in_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("XP_EXPAND_HOST", "cms.internal");
        }
        let result = expand_env("https://${XP_EXPAND_HOST}/uploads", "cms.images_url").unwrap();
        assert_eq!(result, "https://cms.internal/uploads");
        unsafe {
            std::env::remove_var("XP_EXPAND_HOST");
        }
    }

    #[test]
    fn test_bare_dollar_untouched() {
        let result = expand_env("https://example.com/$path", "site.url").unwrap();
        assert_eq!(result, "https://example.com/$path");
    }

    #[test]
    fn test_expand_opt_none_stays_none() {
        let mut value = None;
        expand_opt(&mut value, "cms.token").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_expand_opt_some() {
        let mut value = Some("${XP_EXPAND_OPT_UNSET:-fallback}".to_owned());
        expand_opt(&mut value, "cms.token").unwrap();
        assert_eq!(value.as_deref(), Some("fallback"));
    }
}
