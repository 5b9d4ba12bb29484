use group_buy_core::{ButtonAction, ClassSlot, CssClasses, WidgetVariant, translations};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub variant: WidgetVariant,
    pub lang: AttrValue,
    #[prop_or_default]
    pub classes: CssClasses,
    pub savings_amount: AttrValue,
    pub discounted_total_price: AttrValue,
    #[prop_or_default]
    pub on_action: Callback<ButtonAction>,
}

fn action_button(
    action: ButtonAction,
    label: &str,
    class: &str,
    on_action: &Callback<ButtonAction>,
) -> Html {
    let onclick = on_action.reform(move |_: MouseEvent| action);
    html! {
        <button id={action.button_id()} type="button" class={class.to_string()} {onclick}>
            { label.to_string() }
        </button>
    }
}

#[function_component(GroupBuy)]
pub fn group_buy(p: &Props) -> Html {
    let i18n = translations(&p.lang);
    let class = |slot: ClassSlot| p.classes.get(slot).to_string();

    let buttons = p.variant.buttons().iter().enumerate().map(|(i, &action)| {
        let label = match action {
            ButtonAction::Start => &i18n.button_text,
            ButtonAction::Join => &i18n.join_button_text,
        };
        let separator = if i > 0 {
            html! { <p>{ i18n.or.clone() }</p> }
        } else {
            Html::default()
        };
        html! {
            <>
                { separator }
                { action_button(action, label, p.classes.get(ClassSlot::Button), &p.on_action) }
            </>
        }
    });

    html! {
        <div class={class(ClassSlot::Container)}>
            <h3 class={class(ClassSlot::Header)}>
                { format!("{} {}!", i18n.title, p.savings_amount) }
            </h3>
            <p class={class(ClassSlot::Paragraph)}>
                { i18n.description.clone() }
                { " " }
                <a href="#" class={class(ClassSlot::Link)}>{ i18n.link_text.clone() }</a>
            </p>
            <p class={class(ClassSlot::Savings)}>
                { format!("{} {}.", i18n.discounted_price, p.discounted_total_price) }
            </p>
            { for buttons }
        </div>
    }
}
