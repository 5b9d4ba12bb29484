//! JavaScript entry points for host pages
use std::cell::RefCell;
use std::collections::BTreeMap;

use group_buy_core::{Amounts, CssClasses, RenderRequest, WidgetConfig, display_amount};
use js_sys::{Function, Reflect};
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use yew::Callback;

use crate::api::BasketEmitter;
use crate::dom;
use crate::widget::{BasketHook, GroupBuyWidget};

fn get(options: &JsValue, key: &str) -> JsValue {
    Reflect::get(options, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

/// Amounts may arrive as strings or numbers; falsy values read as missing.
fn amount(value: JsValue) -> String {
    display_amount(&serde_wasm_bindgen::from_value::<Value>(value).unwrap_or(Value::Null))
}

fn css_classes_from(value: JsValue) -> CssClasses {
    if !value.is_object() {
        return CssClasses::default();
    }
    match serde_wasm_bindgen::from_value::<BTreeMap<String, String>>(value) {
        Ok(named) => CssClasses::from_named(named.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
        Err(e) => {
            log::warn!("render_group_buy > ignoring unreadable cssClasses: {e}");
            CssClasses::default()
        }
    }
}

fn config_from(value: JsValue) -> Option<WidgetConfig> {
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value::<WidgetConfig>(value) {
        Ok(config) => match config.validate() {
            Ok(()) => Some(config),
            Err(e) => {
                log::warn!("init > ignoring invalid config: {e}");
                None
            }
        },
        Err(e) => {
            log::warn!("init > ignoring unreadable config: {e}");
            None
        }
    }
}

/// Wrap a JS hook so it receives an `emit(products)` function.
fn js_hook(function: Function) -> BasketHook {
    Callback::from(move |emitter: BasketEmitter| {
        let emit = Closure::<dyn Fn(JsValue)>::new(move |products: JsValue| {
            match serde_wasm_bindgen::from_value::<Value>(products) {
                Ok(products) => emitter.emit(products),
                Err(e) => log::warn!("emit > products are not serializable: {e}"),
            }
        })
        .into_js_value();
        if let Err(e) = function.call1(&JsValue::NULL, &emit) {
            log::error!("group buy hook threw: {}", dom::js_error_message(&e));
        }
    })
}

fn request_from(options: &JsValue) -> RenderRequest<BasketHook> {
    RenderRequest {
        discounted_total_price: amount(get(options, "discountedTotalPrice")),
        savings_amount: amount(get(options, "savingsAmount")),
        on_start: get(options, "onStartGroupBuy").dyn_into::<Function>().ok().map(js_hook),
        on_join: get(options, "onJoinGroupBuy").dyn_into::<Function>().ok().map(js_hook),
        lang: get(options, "lang").as_string().unwrap_or_default(),
        css_classes: css_classes_from(get(options, "cssClasses")),
    }
}

/// A widget instance owned by the host page.
#[wasm_bindgen(js_name = GroupBuyWidget)]
pub struct JsGroupBuyWidget {
    inner: GroupBuyWidget,
}

#[wasm_bindgen(js_class = GroupBuyWidget)]
impl JsGroupBuyWidget {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(config: JsValue) -> Self {
        Self {
            inner: GroupBuyWidget::new(config_from(config).unwrap_or_default()),
        }
    }

    pub fn init(&mut self) {
        self.inner.init();
    }

    /// Returns `refresh(savingsAmount, discountedTotalPrice)` or `undefined`.
    #[wasm_bindgen(js_name = renderGroupBuy)]
    pub fn render_group_buy(&self, options: JsValue) -> JsValue {
        render_with(&self.inner, &options)
    }

    #[wasm_bindgen(js_name = groupPurchaseId)]
    #[must_use]
    pub fn group_purchase_id(&self) -> Option<String> {
        self.inner
            .session()
            .group_purchase_id()
            .map(|id| id.as_str().to_string())
    }
}

fn render_with(widget: &GroupBuyWidget, options: &JsValue) -> JsValue {
    let Ok(mut handle) = widget.render(request_from(options)) else {
        return JsValue::UNDEFINED;
    };
    Closure::<dyn FnMut(JsValue, JsValue)>::new(move |savings: JsValue, price: JsValue| {
        handle.refresh(Amounts::new(amount(savings), amount(price)));
    })
    .into_js_value()
}

thread_local! {
    static DEFAULT_WIDGET: RefCell<GroupBuyWidget> =
        RefCell::new(GroupBuyWidget::new(WidgetConfig::default()));
}

/// Module-level `init` for pages using a single widget.
#[wasm_bindgen(js_name = init)]
pub fn init(config: JsValue) {
    DEFAULT_WIDGET.with(|cell| {
        let mut widget = cell.borrow_mut();
        if let Some(config) = config_from(config) {
            widget.reconfigure(config);
        }
        widget.init();
    });
}

#[wasm_bindgen(js_name = renderGroupBuy)]
#[must_use]
pub fn render_group_buy(options: JsValue) -> JsValue {
    DEFAULT_WIDGET.with(|cell| render_with(&cell.borrow(), &options))
}

#[wasm_bindgen(js_name = groupPurchaseId)]
#[must_use]
pub fn group_purchase_id() -> Option<String> {
    DEFAULT_WIDGET.with(|cell| {
        cell.borrow()
            .session()
            .group_purchase_id()
            .map(|id| id.as_str().to_string())
    })
}
