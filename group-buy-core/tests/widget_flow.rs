use group_buy_core::{
    ApiErrorCode, ButtonAction, GroupPurchaseSession, Notification, SubmitOutcome, ToastKind,
    UiEffect, WidgetConfig, WidgetVariant, api::interpret_response, consume_query_param,
    translations,
};
use serde_json::json;

fn session_from(href: &str, config: &WidgetConfig) -> (GroupPurchaseSession, String) {
    let mut session = GroupPurchaseSession::new();
    match consume_query_param(href, &config.query_param) {
        Some(consumed) => {
            session.adopt(consumed.id);
            (session, consumed.cleaned_href)
        }
        None => (session, href.to_string()),
    }
}

#[test]
fn invited_shopper_joins_with_carried_id() {
    let config = WidgetConfig::default();
    let (session, href) = session_from(
        "https://shop.example/product/9?__groupPurchaseId=X&ref=mail",
        &config,
    );
    assert!(!href.contains("__groupPurchaseId"));
    assert_eq!(href, "https://shop.example/product/9?ref=mail");

    let variant = session.variant();
    assert!(matches!(variant, WidgetVariant::Active(ref id) if id.as_str() == "X"));

    let shape = variant
        .payload_shape(ButtonAction::Join)
        .expect("active variant can join");
    let body = serde_json::to_value(shape.build(json!(["sku-1"]))).expect("serializable");
    assert_eq!(body, json!({ "products": ["sku-1"], "groupPurchaseId": "X" }));
}

#[test]
fn plain_visit_starts_a_new_group_buy() {
    let config = WidgetConfig::default();
    let (session, href) = session_from("https://shop.example/product/9", &config);
    assert_eq!(href, "https://shop.example/product/9");
    assert!(session.group_purchase_id().is_none());

    let variant = session.variant();
    assert_eq!(variant, WidgetVariant::New);
    let shape = variant
        .payload_shape(ButtonAction::Start)
        .expect("start always available");
    let body = serde_json::to_value(shape.build(json!(["sku-1"]))).expect("serializable");
    assert_eq!(body, json!({ "products": ["sku-1"] }));
}

#[test]
fn basket_value_error_shows_specific_toast() {
    let config = WidgetConfig::default();
    let i18n = translations("en");
    let outcome = interpret_response(422, r#"{"error":"target_basket_value_not_met"}"#);
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            status: 422,
            code: ApiErrorCode::TargetBasketValueNotMet
        }
    );
    match outcome.effect(i18n, &config) {
        UiEffect::Toast(Notification { message, kind, .. }) => {
            assert_eq!(message, i18n.basket_value_not_met);
            assert_eq!(kind, ToastKind::Error);
        }
        UiEffect::Navigate(url) => panic!("unexpected navigation to {url}"),
    }
}

#[test]
fn basket_content_error_shows_specific_toast() {
    let config = WidgetConfig::default();
    let i18n = translations("hu");
    let effect = interpret_response(400, r#"{"error":"target_basket_content_not_met"}"#)
        .effect(i18n, &config);
    assert_eq!(
        effect,
        UiEffect::Toast(Notification::new(
            i18n.basket_content_not_met.clone(),
            ToastKind::Error
        ))
    );
}

#[test]
fn unknown_error_code_falls_back_to_generic_toast() {
    let config = WidgetConfig {
        toast_duration_ms: 3000,
        ..WidgetConfig::default()
    };
    let i18n = translations("en");
    let effect =
        interpret_response(409, r#"{"error":"group_purchase_closed"}"#).effect(i18n, &config);
    assert_eq!(
        effect,
        UiEffect::Toast(
            Notification::new(i18n.generic_error.clone(), ToastKind::Error).with_duration(3000)
        )
    );
}

#[test]
fn success_redirects_to_returned_url() {
    let config = WidgetConfig::default();
    let effect = interpret_response(200, r#"{"redirectUrl":"https://shop.example/checkout/gp-7"}"#)
        .effect(translations("en"), &config);
    assert_eq!(
        effect,
        UiEffect::Navigate("https://shop.example/checkout/gp-7".into())
    );
}
