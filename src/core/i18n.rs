//! Translation lookup
//!
//! Catalogs are JSON files embedded at compile time, one per locale,
//! addressed by dotted keys (`"reserva.successDesc"`). Missing keys fall
//! back to Spanish and, failing that, resolve to the key itself so a
//! broken key is visible on the page instead of blank. The current
//! locale is explicit state owned by the UI layer and passed into every
//! lookup; nothing in here is mutable.

use std::sync::LazyLock;

use serde::Deserialize;
use serde_json::Value;

/// Languages the site ships catalogs for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Locale {
    /// Spanish, the fallback for every other catalog
    #[default]
    Es,
    En,
    Fr,
    De,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::Es, Locale::En, Locale::Fr, Locale::De];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::De => "de",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "en" => Locale::En,
            "fr" => Locale::Fr,
            "de" => Locale::De,
            _ => Locale::Es,
        }
    }

    /// Native-language name shown in the language menu.
    pub fn label(&self) -> &'static str {
        match self {
            Locale::Es => "Español",
            Locale::En => "English",
            Locale::Fr => "Français",
            Locale::De => "Deutsch",
        }
    }

    /// Country code of the flag asset used in the language menu.
    pub fn flag_code(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "gb",
            Locale::Fr => "fr",
            Locale::De => "de",
        }
    }
}

/// One FAQ entry as stored in the catalogs
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QaEntry {
    pub q: String,
    pub a: String,
}

static ES: LazyLock<Value> = LazyLock::new(|| parse_catalog(include_str!("locales/es.json")));
static EN: LazyLock<Value> = LazyLock::new(|| parse_catalog(include_str!("locales/en.json")));
static FR: LazyLock<Value> = LazyLock::new(|| parse_catalog(include_str!("locales/fr.json")));
static DE: LazyLock<Value> = LazyLock::new(|| parse_catalog(include_str!("locales/de.json")));

fn parse_catalog(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or(Value::Null)
}

fn catalog(locale: Locale) -> &'static Value {
    match locale {
        Locale::Es => &ES,
        Locale::En => &EN,
        Locale::Fr => &FR,
        Locale::De => &DE,
    }
}

/// Walk a dotted key through nested JSON objects.
fn resolve<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, part| node.get(part))
}

fn resolve_with_fallback(locale: Locale, key: &str) -> Option<&'static Value> {
    resolve(catalog(locale), key).or_else(|| resolve(catalog(Locale::Es), key))
}

/// Localised text for a dotted key.
pub fn lookup(locale: Locale, key: &str) -> String {
    resolve_with_fallback(locale, key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| key.to_owned())
}

/// Localised text with `{{var}}` interpolation.
pub fn lookup_with(locale: Locale, key: &str, vars: &[(&str, &str)]) -> String {
    let mut text = lookup(locale, key);
    for (name, value) in vars {
        text = text.replace(&format!("{{{{{name}}}}}"), value);
    }
    text
}

/// Ordered list of localised strings (feature lists, info lists).
pub fn list(locale: Locale, key: &str) -> Vec<String> {
    resolve_with_fallback(locale, key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// Ordered list of question/answer entries (the FAQ page).
pub fn qa_list(locale: Locale, key: &str) -> Vec<QaEntry> {
    resolve_with_fallback(locale, key)
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}
