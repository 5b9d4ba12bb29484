//! Transient toast banners
use group_buy_core::{Notification, ToastKind};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::dom;

const FADE_MS: i32 = 300;
const ENTER_DELAY_MS: i32 = 10;

fn background(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Info => "#2563eb",
        ToastKind::Success => "#16a34a",
        ToastKind::Error => "#dc2626",
    }
}

/// Show `notification` and remove it once its duration has elapsed.
///
/// Fire-and-forget; DOM failures are logged.
pub fn notify(notification: Notification) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = show(&notification).await {
            log::error!("Failed to show notification: {}", dom::js_error_message(&e));
        }
    });
}

#[allow(clippy::future_not_send)]
async fn show(notification: &Notification) -> Result<(), JsValue> {
    let doc = dom::document();
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let banner: HtmlElement = doc
        .create_element("div")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("toast element is not an HtmlElement"))?;
    banner.set_class_name(&notification.css_class());
    banner.set_attribute("role", "status")?;
    banner.set_attribute("aria-live", "polite")?;
    banner.set_text_content(Some(&notification.message));

    let style = banner.style();
    for (property, value) in [
        ("position", "fixed"),
        ("top", "1rem"),
        ("right", "1rem"),
        ("z-index", "10000"),
        ("padding", "0.75rem 1rem"),
        ("border-radius", "0.5rem"),
        ("color", "#ffffff"),
        ("background-color", background(notification.kind)),
        ("opacity", "0"),
        ("transition", "opacity 300ms ease-in-out"),
    ] {
        style.set_property(property, value)?;
    }

    body.append_child(&banner)?;
    dom::sleep_ms(ENTER_DELAY_MS).await?;
    style.set_property("opacity", "1")?;

    let duration = i32::try_from(notification.duration_ms).unwrap_or(i32::MAX);
    dom::sleep_ms(duration).await?;
    style.set_property("opacity", "0")?;
    dom::sleep_ms(FADE_MS).await?;
    banner.remove();
    Ok(())
}
