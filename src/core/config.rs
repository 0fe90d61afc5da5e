//! Site configuration
//!
//! Only the server reads the environment; the resolved config is handed
//! to the app as context so the hydrated client sees the same values.

use crate::core::i18n::Locale;

/// Deployment-level settings for the site
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Locale used until the visitor picks one
    pub default_locale: Locale,
}

impl SiteConfig {
    /// Build the config from environment variables.
    ///
    /// `TIGERTAG_DEFAULT_LOCALE` selects the initial language; anything
    /// unset or unrecognised means Spanish.
    pub fn from_env() -> Self {
        let default_locale = std::env::var("TIGERTAG_DEFAULT_LOCALE")
            .map(|value| Locale::from_str(&value))
            .unwrap_or_default();
        Self { default_locale }
    }
}
