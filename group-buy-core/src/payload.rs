//! Request body sent to the group purchase endpoint
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::session::GroupPurchaseId;

/// Body of `POST /api/v1/group-purchase`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPayload {
    /// Basket contents, passed through as supplied by the host page.
    pub products: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_purchase_id: Option<GroupPurchaseId>,
}

/// How a button turns a basket into a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadShape {
    Start,
    Join(GroupPurchaseId),
}

impl PayloadShape {
    #[must_use]
    pub fn build(&self, products: Value) -> ApiPayload {
        ApiPayload {
            products,
            group_purchase_id: match self {
                Self::Start => None,
                Self::Join(id) => Some(id.clone()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn start_payload_omits_group_purchase_id() {
        let payload = PayloadShape::Start.build(json!([{ "sku": "A1", "qty": 2 }]));
        let body = serde_json::to_value(&payload).expect("serializable");
        assert_eq!(body, json!({ "products": [{ "sku": "A1", "qty": 2 }] }));
        assert!(body.get("groupPurchaseId").is_none());
    }

    #[test]
    fn join_payload_carries_session_id() {
        let id = GroupPurchaseId::new("gp-42").expect("non-empty");
        let payload = PayloadShape::Join(id).build(json!({ "basketId": 7 }));
        let body = serde_json::to_value(&payload).expect("serializable");
        assert_eq!(
            body,
            json!({ "products": { "basketId": 7 }, "groupPurchaseId": "gp-42" })
        );
    }
}
