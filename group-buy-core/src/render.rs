//! Render request validation and markup variant selection
use serde_json::Value;
use thiserror::Error;

use crate::classes::CssClasses;
use crate::config::DEFAULT_LANG;
use crate::payload::PayloadShape;
use crate::session::GroupPurchaseId;

pub const START_BUTTON_ID: &str = "start-group-buy-button";
pub const JOIN_BUTTON_ID: &str = "join-group-buy-button";

/// Reasons a render is refused. Checked in declaration order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("no #{0} element found")]
    MissingHostElement(String),
    #[error("onStartGroupBuy is required")]
    MissingStartCallback,
    #[error("discountedTotalPrice is required")]
    MissingDiscountedTotalPrice,
    #[error("savingsAmount is required")]
    MissingSavingsAmount,
}

/// Which markup the widget shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetVariant {
    /// No group purchase in progress: start button only.
    New,
    /// A group purchase id was carried in: join and start buttons.
    Active(GroupPurchaseId),
}

impl WidgetVariant {
    #[must_use]
    pub fn buttons(&self) -> &'static [ButtonAction] {
        match self {
            Self::New => &[ButtonAction::Start],
            Self::Active(_) => &[ButtonAction::Join, ButtonAction::Start],
        }
    }

    /// Payload shape emitted by `action`, or `None` when the variant has no
    /// such button.
    #[must_use]
    pub fn payload_shape(&self, action: ButtonAction) -> Option<PayloadShape> {
        match (action, self) {
            (ButtonAction::Start, _) => Some(PayloadShape::Start),
            (ButtonAction::Join, Self::Active(id)) => Some(PayloadShape::Join(id.clone())),
            (ButtonAction::Join, Self::New) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    Start,
    Join,
}

impl ButtonAction {
    #[must_use]
    pub const fn button_id(self) -> &'static str {
        match self {
            Self::Start => START_BUTTON_ID,
            Self::Join => JOIN_BUTTON_ID,
        }
    }
}

/// Display amounts, already formatted by the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amounts {
    pub savings_amount: String,
    pub discounted_total_price: String,
}

impl Amounts {
    #[must_use]
    pub fn new(
        savings_amount: impl Into<String>,
        discounted_total_price: impl Into<String>,
    ) -> Self {
        Self {
            savings_amount: savings_amount.into(),
            discounted_total_price: discounted_total_price.into(),
        }
    }
}

/// Display text for an amount handed over from JavaScript.
///
/// Strings pass through and non-zero numbers are formatted. Everything JS
/// treats as falsy (`0`, `NaN`, `null`, `false`, missing) becomes empty, so
/// the required-amount check rejects it.
#[must_use]
pub fn display_amount(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(n) => n
            .as_f64()
            .filter(|f| *f != 0.0 && !f.is_nan())
            .map(|f| f.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Everything a render needs from the caller. `H` is the hook type invoked
/// when a button is clicked.
#[derive(Debug, Clone)]
pub struct RenderRequest<H> {
    pub discounted_total_price: String,
    pub savings_amount: String,
    pub on_start: Option<H>,
    pub on_join: Option<H>,
    pub lang: String,
    pub css_classes: CssClasses,
}

impl<H> RenderRequest<H> {
    #[must_use]
    pub fn new(
        discounted_total_price: impl Into<String>,
        savings_amount: impl Into<String>,
        on_start: H,
    ) -> Self {
        Self {
            discounted_total_price: discounted_total_price.into(),
            savings_amount: savings_amount.into(),
            on_start: Some(on_start),
            on_join: None,
            lang: DEFAULT_LANG.to_string(),
            css_classes: CssClasses::default(),
        }
    }

    #[must_use]
    pub fn with_join(mut self, on_join: H) -> Self {
        self.on_join = Some(on_join);
        self
    }

    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Check the caller-supplied fields. The host element check happens in
    /// the DOM layer before this runs.
    ///
    /// # Errors
    ///
    /// Returns the first missing field in order: start hook, price, savings.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.on_start.is_none() {
            return Err(RenderError::MissingStartCallback);
        }
        if self.discounted_total_price.is_empty() {
            return Err(RenderError::MissingDiscountedTotalPrice);
        }
        if self.savings_amount.is_empty() {
            return Err(RenderError::MissingSavingsAmount);
        }
        Ok(())
    }

    #[must_use]
    pub fn amounts(&self) -> Amounts {
        Amounts::new(&self.savings_amount, &self.discounted_total_price)
    }
}
