use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Item type identifier as used by ESI. Opaque; sourced from the offer list.
pub type TypeId = i64;

/// A validated LP store offer: an item and what it costs in loyalty points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoyaltyOffer {
    pub type_id: TypeId,
    pub lp_cost: i64,
}

/// Raw offer entry as returned by the LP store endpoint.
///
/// Both fields are optional so a malformed entry can be dropped on its own
/// instead of failing the whole list.
#[derive(Debug, Deserialize, Serialize)]
pub struct RawLoyaltyOffer {
    pub type_id: Option<TypeId>,
    pub lp_cost: Option<i64>,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>, // Catch unknown fields
}

impl RawLoyaltyOffer {
    /// Keep the entry only if it carries both an identifier and a cost.
    pub fn into_offer(self) -> Option<LoyaltyOffer> {
        match (self.type_id, self.lp_cost) {
            (Some(type_id), Some(lp_cost)) => Some(LoyaltyOffer { type_id, lp_cost }),
            _ => None,
        }
    }
}

/// A standing market order. Unknown fields from the orders endpoint
/// (order_id, volume, location and the rest) are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SellOrder {
    pub price: f64,
    pub is_buy_order: bool,
}

/// One line of the final ranking.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RankedItem {
    pub type_id: TypeId,
    pub name: String,
    pub isk_per_lp: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_offer_with_both_fields_converts() {
        let raw: RawLoyaltyOffer =
            serde_json::from_value(json!({"type_id": 42, "lp_cost": 100, "ak_cost": 5000}))
                .unwrap();
        assert_eq!(
            raw.into_offer(),
            Some(LoyaltyOffer {
                type_id: 42,
                lp_cost: 100
            })
        );
    }

    #[test]
    fn raw_offer_missing_cost_is_dropped() {
        let raw: RawLoyaltyOffer = serde_json::from_value(json!({"type_id": 42})).unwrap();
        assert_eq!(raw.into_offer(), None);
    }

    #[test]
    fn raw_offer_missing_type_id_is_dropped() {
        let raw: RawLoyaltyOffer = serde_json::from_value(json!({"lp_cost": 250})).unwrap();
        assert_eq!(raw.into_offer(), None);
    }

    #[test]
    fn sell_order_ignores_unknown_fields() {
        let order: SellOrder = serde_json::from_value(json!({
            "price": 1500.5,
            "is_buy_order": false,
            "order_id": 987654,
            "volume_remain": 3
        }))
        .unwrap();
        assert_eq!(order.price, 1500.5);
        assert!(!order.is_buy_order);
    }
}
