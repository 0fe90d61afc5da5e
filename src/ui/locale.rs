//! Locale context module for the site language
//!
//! Provides:
//! - LocaleContext for reactive locale state
//! - LocalStorage persistence
//! - html lang attribute sync
//! - Shortcut lookup helpers bound to the current locale

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::config::SiteConfig;
use crate::core::i18n::{self, Locale, QaEntry};

const STORAGE_KEY: &str = "tigertag-locale";

/// Locale context for managing the site language
#[derive(Clone, Copy)]
pub struct LocaleContext {
    /// Currently selected language
    pub locale: RwSignal<Locale>,
}

impl LocaleContext {
    /// Set the locale and persist to localStorage
    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
        persist_locale(locale);
        apply_lang_attribute(locale);
    }

    /// Localised text for a dotted key, tracking the current locale.
    pub fn t(&self, key: &str) -> String {
        i18n::lookup(self.locale.get(), key)
    }

    /// Localised text with `{{var}}` interpolation.
    pub fn t_with(&self, key: &str, vars: &[(&str, &str)]) -> String {
        i18n::lookup_with(self.locale.get(), key, vars)
    }

    /// Localised list of strings.
    pub fn t_list(&self, key: &str) -> Vec<String> {
        i18n::list(self.locale.get(), key)
    }

    /// Localised question/answer entries.
    pub fn t_qa(&self, key: &str) -> Vec<QaEntry> {
        i18n::qa_list(self.locale.get(), key)
    }
}

/// Persist the locale to localStorage
fn persist_locale(locale: Locale) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, locale.as_str());
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = locale;
    }
}

/// Mirror the locale onto `<html lang>` so the browser knows the page language
fn apply_lang_attribute(locale: Locale) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(html) = document.document_element() {
                    let _ = html.set_attribute("lang", locale.as_str());
                }
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = locale;
    }
}

/// Load the locale from localStorage
fn load_persisted_locale() -> Option<Locale> {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
                    return Some(Locale::from_str(&value));
                }
            }
        }
    }
    None
}

/// Provide the locale context to the application
pub fn provide_locale_context() -> LocaleContext {
    let default_locale = use_context::<SiteConfig>()
        .map(|config| config.default_locale)
        .unwrap_or_default();
    let initial = load_persisted_locale().unwrap_or(default_locale);

    let ctx = LocaleContext {
        locale: RwSignal::new(initial),
    };

    #[cfg(not(feature = "ssr"))]
    {
        let locale = ctx.locale;
        Effect::new(move |_| {
            apply_lang_attribute(locale.get());
        });
    }

    provide_context(ctx);

    ctx
}

/// Use the locale context from anywhere in the component tree
pub fn use_locale_context() -> LocaleContext {
    use_context::<LocaleContext>().expect("LocaleContext should be provided")
}
