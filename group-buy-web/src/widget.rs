//! The widget facade: session context, rendering and refresh
use std::rc::Rc;

use group_buy_core::{
    Amounts, ButtonAction, GroupPurchaseId, GroupPurchaseSession, RenderError, RenderRequest,
    WidgetConfig, WidgetVariant,
};
use yew::{AppHandle, AttrValue, Callback, Renderer};

use crate::api::{ApiClient, BasketEmitter};
use crate::components::group_buy::{GroupBuy, Props};
use crate::{dom, session};

/// Hook invoked when the shopper clicks start or join.
pub type BasketHook = Callback<BasketEmitter>;

/// Owns the session context and hands it to every render and submit.
pub struct GroupBuyWidget {
    config: Rc<WidgetConfig>,
    session: GroupPurchaseSession,
    client: ApiClient,
}

impl GroupBuyWidget {
    #[must_use]
    pub fn new(config: WidgetConfig) -> Self {
        let config = Rc::new(config);
        Self {
            client: ApiClient::new(Rc::clone(&config)),
            config,
            session: GroupPurchaseSession::new(),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &GroupPurchaseSession {
        &self.session
    }

    /// Replace the configuration, keeping the current session.
    pub fn reconfigure(&mut self, config: WidgetConfig) {
        self.config = Rc::new(config);
        self.client = ApiClient::new(Rc::clone(&self.config));
    }

    /// Consume the group purchase id from the page URL, if any.
    pub fn init(&mut self) -> Option<&GroupPurchaseId> {
        session::init(&self.config, &mut self.session);
        self.session.group_purchase_id()
    }

    /// Mount the widget into the host element.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition; the DOM is left untouched and
    /// a warning is logged.
    pub fn render(&self, request: RenderRequest<BasketHook>) -> Result<RefreshHandle, RenderError> {
        let result = self.try_render(request);
        if let Err(e) = &result {
            log::warn!("render_group_buy > {e}");
        }
        result
    }

    fn try_render(&self, request: RenderRequest<BasketHook>) -> Result<RefreshHandle, RenderError> {
        let host = dom::element_by_id(&self.config.host_element_id)
            .ok_or_else(|| RenderError::MissingHostElement(self.config.host_element_id.clone()))?;
        request.validate()?;
        let Some(on_start) = request.on_start.clone() else {
            return Err(RenderError::MissingStartCallback);
        };

        let lang = if request.lang.is_empty() {
            self.config.default_lang.clone()
        } else {
            request.lang.clone()
        };
        let amounts = request.amounts();
        let variant = self.session.variant();
        let on_action = action_callback(
            self.client.clone(),
            variant.clone(),
            on_start,
            request.on_join.clone(),
            Rc::from(lang.as_str()),
        );

        let props = Props {
            variant,
            lang: AttrValue::from(lang),
            classes: request.css_classes.clone(),
            savings_amount: AttrValue::from(amounts.savings_amount),
            discounted_total_price: AttrValue::from(amounts.discounted_total_price),
            on_action,
        };

        host.set_inner_html("");
        let handle = Renderer::<GroupBuy>::with_root_and_props(host, props.clone()).render();
        Ok(RefreshHandle { handle, props })
    }
}

/// One click path for both buttons: the variant decides the payload shape
/// and the action picks the hook.
fn action_callback(
    client: ApiClient,
    variant: WidgetVariant,
    on_start: BasketHook,
    on_join: Option<BasketHook>,
    lang: Rc<str>,
) -> Callback<ButtonAction> {
    Callback::from(move |action: ButtonAction| {
        let Some(shape) = variant.payload_shape(action) else {
            log::warn!("render_group_buy > {action:?} is not available without a group purchase");
            return;
        };
        let hook = match action {
            ButtonAction::Start => Some(&on_start),
            ButtonAction::Join => on_join.as_ref(),
        };
        match hook {
            Some(hook) => hook.emit(BasketEmitter::new(client.clone(), shape, Rc::clone(&lang))),
            None => log::warn!("render_group_buy > onJoinGroupBuy is required to join"),
        }
    })
}

/// Returned by [`GroupBuyWidget::render`] to update the displayed amounts.
pub struct RefreshHandle {
    handle: AppHandle<GroupBuy>,
    props: Props,
}

impl RefreshHandle {
    /// Re-render with new amounts. Variant, classes, language and click
    /// handlers carry over from the initial render.
    pub fn refresh(&mut self, amounts: Amounts) {
        log::debug!("refreshing group buy amounts");
        self.props.savings_amount = AttrValue::from(amounts.savings_amount);
        self.props.discounted_total_price = AttrValue::from(amounts.discounted_total_price);
        self.handle.update(self.props.clone());
    }

    #[must_use]
    pub const fn variant(&self) -> &WidgetVariant {
        &self.props.variant
    }

    /// Unmount the widget from its host element.
    pub fn destroy(self) {
        self.handle.destroy();
    }
}
