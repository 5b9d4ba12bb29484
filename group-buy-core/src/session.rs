//! Group purchase session state and URL handling
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::render::WidgetVariant;

/// Opaque identifier correlating the starter and the joiner of a group buy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupPurchaseId(String);

impl GroupPurchaseId {
    /// Wrap a raw id. Returns `None` for an empty string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        (!raw.is_empty()).then_some(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupPurchaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Session context shared by the renderer and the submit path.
///
/// Written once at init and read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupPurchaseSession {
    group_purchase_id: Option<GroupPurchaseId>,
}

impl GroupPurchaseSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn group_purchase_id(&self) -> Option<&GroupPurchaseId> {
        self.group_purchase_id.as_ref()
    }

    /// Store an id picked up from the URL. Existing ids are replaced.
    pub fn adopt(&mut self, id: GroupPurchaseId) {
        log::debug!("group purchase session adopted id {id}");
        self.group_purchase_id = Some(id);
    }

    /// Which markup variant a render should use.
    #[must_use]
    pub fn variant(&self) -> WidgetVariant {
        self.group_purchase_id
            .clone()
            .map_or(WidgetVariant::New, WidgetVariant::Active)
    }
}

/// Result of pulling a query parameter out of a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumedParam {
    pub id: GroupPurchaseId,
    /// The original URL with every occurrence of the parameter removed.
    pub cleaned_href: String,
}

/// Read `name` from the query string of `href` and strip it from the URL.
///
/// The first occurrence supplies the value and all occurrences are removed.
/// Remaining parameters are re-serialized and the fragment is kept.
/// Returns `None` when the URL cannot be parsed or the parameter is absent or
/// empty, in which case the URL should be left untouched.
#[must_use]
pub fn consume_query_param(href: &str, name: &str) -> Option<ConsumedParam> {
    let mut url = match Url::parse(href) {
        Ok(url) => url,
        Err(e) => {
            log::debug!("cannot parse page URL {href}: {e}");
            return None;
        }
    };

    let value = url
        .query_pairs()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.into_owned())?;
    let id = GroupPurchaseId::new(value)?;

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| *key != name)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }

    Some(ConsumedParam {
        id,
        cleaned_href: url.into(),
    })
}
