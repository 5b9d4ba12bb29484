//! Group Buy Core
//!
//! Platform-agnostic logic for the group buy widget: session extraction,
//! translations, render validation, request payloads and response handling.
//! This crate has no DOM dependency; the web crate wires it to the browser.

pub mod api;
pub mod classes;
pub mod config;
pub mod i18n;
pub mod notification;
pub mod payload;
pub mod render;
pub mod session;

pub use api::{ApiErrorCode, ErrorResponse, SubmitOutcome, SuccessResponse, UiEffect};
pub use classes::{ClassSlot, CssClasses};
pub use config::{ConfigError, WidgetConfig};
pub use i18n::{Translations, translations};
pub use notification::{Notification, ToastKind};
pub use payload::{ApiPayload, PayloadShape};
pub use render::{
    Amounts, ButtonAction, RenderError, RenderRequest, WidgetVariant, display_amount,
};
pub use session::{ConsumedParam, GroupPurchaseId, GroupPurchaseSession, consume_query_param};
