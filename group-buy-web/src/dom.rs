use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Headers, Request, RequestInit, Response, Window};

/// Name of the global object mirroring the session for other page scripts.
pub const LEGACY_GLOBAL: &str = "__groupPurchase";

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

#[must_use]
pub fn element_by_id(id: &str) -> Option<Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Current page URL.
///
/// # Errors
/// Returns an error if the location cannot be read.
pub fn location_href() -> Result<String, JsValue> {
    window().location().href()
}

/// Swap the visible URL without reloading or adding a history entry.
///
/// # Errors
/// Returns an error if the browser rejects the history update.
pub fn replace_url(href: &str) -> Result<(), JsValue> {
    window()
        .history()?
        .replace_state_with_url(&Object::new(), "", Some(href))
}

/// Send the browser to `href`.
///
/// # Errors
/// Returns an error if the location cannot be assigned.
pub fn navigate(href: &str) -> Result<(), JsValue> {
    window().location().set_href(href)
}

/// Write `value` under `key` on `window.__groupPurchase`, creating the
/// object when missing.
///
/// # Errors
/// Returns an error if the global cannot be read or written.
pub fn set_legacy_global(key: &str, value: &JsValue) -> Result<(), JsValue> {
    let win = window();
    let existing = Reflect::get(&win, &JsValue::from_str(LEGACY_GLOBAL))?;
    let holder = if existing.is_object() {
        existing
    } else {
        let created: JsValue = Object::new().into();
        Reflect::set(&win, &JsValue::from_str(LEGACY_GLOBAL), &created)?;
        created
    };
    Reflect::set(&holder, &JsValue::from_str(key), value)?;
    Ok(())
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
///
/// # Panics
/// Panics if no browser `window` is available.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// POST a JSON body and return the browser `Response`.
///
/// # Errors
/// Returns an error if the request cannot be built, the fetch rejects, or the
/// result is not a `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn post_json(url: &str, body: &str) -> Result<Response, JsValue> {
    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init)?;
    let resp_value = JsFuture::from(window().fetch_with_request(&request)).await?;
    resp_value.dyn_into::<Response>()
}

/// Read a response body as text.
///
/// # Errors
/// Returns an error if the body cannot be read or is not a string.
#[allow(clippy::future_not_send)]
pub async fn response_text(response: &Response) -> Result<String, JsValue> {
    let text = JsFuture::from(response.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body was not text"))
}
