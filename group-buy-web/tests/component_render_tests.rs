use futures::executor::block_on;
use group_buy_core::{ButtonAction, ClassSlot, CssClasses, GroupPurchaseId, WidgetVariant};
use group_buy_web::components::group_buy::{GroupBuy, Props};
use yew::{AttrValue, Callback, LocalServerRenderer};

fn render(props: Props) -> String {
    block_on(LocalServerRenderer::<GroupBuy>::with_props(props).render())
}

fn props(lang: &str, variant: WidgetVariant) -> Props {
    Props {
        variant,
        lang: AttrValue::from(lang.to_string()),
        classes: CssClasses::default(),
        savings_amount: AttrValue::from("15 PLN"),
        discounted_total_price: AttrValue::from("135 PLN"),
        on_action: Callback::noop(),
    }
}

#[test]
fn headline_and_price_include_amounts() {
    let html = render(props("en", WidgetVariant::New));
    assert!(html.contains("Shop with friends and save 15 PLN!"));
    assert!(html.contains("For this purchase you will pay just: 135 PLN."));
    assert!(html.contains("See how it works"));
    assert!(html.contains("Start a new group buy"));
    assert!(!html.contains("Join existing group buy"));
}

#[test]
fn polish_copy_is_used_when_requested() {
    let id = GroupPurchaseId::new("gp-9").expect("non-empty");
    let html = render(props("pl", WidgetVariant::Active(id)));
    assert!(html.contains("Kupuj z przyjaciółmi i zaoszczędź 15 PLN!"));
    assert!(html.contains("Dołącz do istniejącego zakupu grupowego"));
    assert!(html.contains("Rozpocznij zakup grupowy"));
}

#[test]
fn unknown_language_renders_english() {
    let html = render(props("xx", WidgetVariant::New));
    assert!(html.contains("Shop with friends and save"));
}

#[test]
fn class_overrides_land_on_their_slots() {
    let mut p = props("en", WidgetVariant::Active(GroupPurchaseId::new("g").expect("non-empty")));
    p.classes = CssClasses::with_overrides([
        (ClassSlot::Container, "gb"),
        (ClassSlot::Header, "gb__title"),
        (ClassSlot::Savings, "gb__savings"),
        (ClassSlot::Link, "gb__link"),
        (ClassSlot::Button, "gb__btn"),
    ]);
    let html = render(p);
    assert!(html.contains(r#"class="gb""#));
    assert!(html.contains(r#"class="gb__title""#));
    assert!(html.contains(r#"class="gb__savings""#));
    assert!(html.contains(r#"class="gb__link""#));
    assert_eq!(html.matches(r#"class="gb__btn""#).count(), 2);
}

#[test]
fn button_ids_follow_actions() {
    let id = GroupPurchaseId::new("g").expect("non-empty");
    let html = render(props("hu", WidgetVariant::Active(id)));
    for action in [ButtonAction::Start, ButtonAction::Join] {
        assert!(html.contains(&format!(r#"id="{}""#, action.button_id())));
    }
}
