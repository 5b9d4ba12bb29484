//! Session bootstrap against the live page URL
use group_buy_core::{
    GroupPurchaseSession, Notification, ToastKind, WidgetConfig, consume_query_param,
    translations,
};
use wasm_bindgen::JsValue;

use crate::{dom, notify};

/// Pick up a group purchase id from the page URL.
///
/// When the configured query parameter is present the id is stored in
/// `session`, stripped from the visible URL, mirrored to the legacy global
/// and, if enabled, announced with a toast. Otherwise nothing changes, so an
/// already populated session survives repeated calls.
pub fn init(config: &WidgetConfig, session: &mut GroupPurchaseSession) {
    let href = match dom::location_href() {
        Ok(href) => href,
        Err(e) => {
            log::warn!("init > cannot read location: {}", dom::js_error_message(&e));
            return;
        }
    };

    let Some(consumed) = consume_query_param(&href, &config.query_param) else {
        return;
    };

    if let Err(e) = dom::replace_url(&consumed.cleaned_href) {
        log::warn!("init > cannot update URL: {}", dom::js_error_message(&e));
    }
    if let Err(e) = dom::set_legacy_global(
        "groupPurchaseId",
        &JsValue::from_str(consumed.id.as_str()),
    ) {
        log::warn!("init > cannot publish group purchase id: {}", dom::js_error_message(&e));
    }

    session.adopt(consumed.id);

    if config.notify_on_join {
        let i18n = translations(&config.default_lang);
        notify::notify(
            Notification::new(i18n.joined_notice.clone(), ToastKind::Info)
                .with_duration(config.toast_duration_ms),
        );
    }
}
