//! Group purchase endpoint responses and what the widget does with them
use serde::{Deserialize, Serialize};

use crate::config::WidgetConfig;
use crate::i18n::Translations;
use crate::notification::{Notification, ToastKind};

/// `2xx` body: where to send the shopper next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse {
    pub redirect_url: String,
}

/// Non-`2xx` body: a machine-readable error code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Business-rule errors the backend reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorCode {
    TargetBasketContentNotMet,
    TargetBasketValueNotMet,
    Other(String),
}

impl ApiErrorCode {
    #[must_use]
    pub fn parse(code: &str) -> Self {
        match code {
            "target_basket_content_not_met" => Self::TargetBasketContentNotMet,
            "target_basket_value_not_met" => Self::TargetBasketValueNotMet,
            other => Self::Other(other.to_string()),
        }
    }

    /// Localized message for the shopper.
    #[must_use]
    pub fn message<'a>(&self, i18n: &'a Translations) -> &'a str {
        match self {
            Self::TargetBasketContentNotMet => &i18n.basket_content_not_met,
            Self::TargetBasketValueNotMet => &i18n.basket_value_not_met,
            Self::Other(_) => &i18n.generic_error,
        }
    }
}

/// What came back from one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Redirect(String),
    Rejected { status: u16, code: ApiErrorCode },
    /// The request never produced a usable response.
    Failed(String),
}

/// Side effect the browser layer should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    Navigate(String),
    Toast(Notification),
}

/// Classify a finished HTTP exchange.
///
/// A `2xx` without a readable `redirectUrl` counts as a failure. A non-`2xx`
/// without a readable `error` maps to an unrecognized code.
#[must_use]
pub fn interpret_response(status: u16, body: &str) -> SubmitOutcome {
    if (200..300).contains(&status) {
        return match serde_json::from_str::<SuccessResponse>(body) {
            Ok(success) => SubmitOutcome::Redirect(success.redirect_url),
            Err(e) => SubmitOutcome::Failed(format!("invalid success body: {e}")),
        };
    }

    let code = serde_json::from_str::<ErrorResponse>(body).map_or_else(
        |_| ApiErrorCode::Other(format!("http_{status}")),
        |err| ApiErrorCode::parse(&err.error),
    );
    SubmitOutcome::Rejected { status, code }
}

impl SubmitOutcome {
    #[must_use]
    pub fn effect(&self, i18n: &Translations, config: &WidgetConfig) -> UiEffect {
        let toast = |message: &str| {
            UiEffect::Toast(
                Notification::new(message, ToastKind::Error)
                    .with_duration(config.toast_duration_ms),
            )
        };
        match self {
            Self::Redirect(url) => UiEffect::Navigate(url.clone()),
            Self::Rejected { code, .. } => toast(code.message(i18n)),
            Self::Failed(_) => toast(&i18n.generic_error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::translations;

    #[test]
    fn known_codes_parse() {
        assert_eq!(
            ApiErrorCode::parse("target_basket_content_not_met"),
            ApiErrorCode::TargetBasketContentNotMet
        );
        assert_eq!(
            ApiErrorCode::parse("target_basket_value_not_met"),
            ApiErrorCode::TargetBasketValueNotMet
        );
        assert_eq!(
            ApiErrorCode::parse("expired"),
            ApiErrorCode::Other("expired".into())
        );
    }

    #[test]
    fn success_body_yields_redirect() {
        assert_eq!(
            interpret_response(201, r#"{"redirectUrl":"https://pay.example/123"}"#),
            SubmitOutcome::Redirect("https://pay.example/123".into())
        );
    }

    #[test]
    fn success_without_redirect_is_failure() {
        assert!(matches!(
            interpret_response(200, "{}"),
            SubmitOutcome::Failed(_)
        ));
    }

    #[test]
    fn unreadable_error_body_is_unknown_code() {
        assert_eq!(
            interpret_response(502, "<html>Bad Gateway</html>"),
            SubmitOutcome::Rejected {
                status: 502,
                code: ApiErrorCode::Other("http_502".into())
            }
        );
    }

    #[test]
    fn failure_effects_use_localized_toasts() {
        let config = WidgetConfig::default();
        let i18n = translations("pl");
        let effect = SubmitOutcome::Failed("network down".into()).effect(i18n, &config);
        assert_eq!(
            effect,
            UiEffect::Toast(Notification::new(&i18n.generic_error, ToastKind::Error))
        );
    }
}
