//! Static translation bundles for the widget copy
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_LANG;

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../i18n/en.json")),
    ("pl", include_str!("../i18n/pl.json")),
    ("hu", include_str!("../i18n/hu.json")),
];

/// Display strings for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    pub title: String,
    pub description: String,
    pub discounted_price: String,
    pub link_text: String,
    pub button_text: String,
    pub join_button_text: String,
    pub or: String,
    pub joined_notice: String,
    pub basket_content_not_met: String,
    pub basket_value_not_met: String,
    pub generic_error: String,
}

static BUNDLES: Lazy<Vec<(&'static str, Translations)>> = Lazy::new(|| {
    LOCALE_TABLE
        .iter()
        .filter_map(|(code, data)| match serde_json::from_str(data) {
            Ok(bundle) => Some((*code, bundle)),
            Err(e) => {
                log::error!("Failed to parse translations for {code}: {e}");
                None
            }
        })
        .collect()
});

static EMPTY: Lazy<Translations> = Lazy::new(Translations::default);

/// Bundle for `lang`, falling back to English when the code is unknown.
#[must_use]
pub fn translations(lang: &str) -> &'static Translations {
    let find = |wanted: &str| {
        BUNDLES
            .iter()
            .find_map(|(code, bundle)| (*code == wanted).then_some(bundle))
    };
    find(lang)
        .or_else(|| find(DEFAULT_LANG))
        .unwrap_or_else(|| &*EMPTY)
}
