use crate::errors::{CoreError, Result};
use crate::models::{LoyaltyOffer, RankedItem, SellOrder, TypeId};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Synthetic name used when an item's name lookup failed. Once substituted
/// it is never retried within a run.
pub fn placeholder_name(type_id: TypeId) -> String {
    format!("Unknown-{}", type_id)
}

/// Combine LP offers, resolved names and per-item sell orders into a ranked
/// list, best ISK-per-LP first.
///
/// An item with no sell orders in the reference region is excluded from the
/// ranking entirely rather than reported with a zero ratio. An item whose
/// name is missing from `names` falls back to [`placeholder_name`].
///
/// Offers are walked in list order and the sort is stable, so tied ratios
/// keep their offer-list order and identical inputs always produce
/// identical output. A duplicate store entry for the same type is ignored
/// after its first occurrence.
///
/// A non-positive LP cost fails validation before any division happens.
pub fn aggregate(
    offers: &[LoyaltyOffer],
    names: &HashMap<TypeId, String>,
    orders: &HashMap<TypeId, Vec<SellOrder>>,
) -> Result<Vec<RankedItem>> {
    let mut ranked = Vec::with_capacity(offers.len());
    let mut seen = HashSet::new();

    for offer in offers {
        if !seen.insert(offer.type_id) {
            continue;
        }

        if offer.lp_cost <= 0 {
            return Err(CoreError::InvalidLpCost {
                type_id: offer.type_id,
                lp_cost: offer.lp_cost,
            });
        }

        let sell_orders = match orders.get(&offer.type_id) {
            Some(list) if !list.is_empty() => list,
            // Nothing on the market for this item: skip it, do not rank it
            // at zero.
            _ => continue,
        };

        // The order list carries no guaranteed ordering; take the maximum
        // here.
        let best_price = sell_orders
            .iter()
            .map(|order| order.price)
            .fold(f64::NEG_INFINITY, f64::max);

        let name = names
            .get(&offer.type_id)
            .cloned()
            .unwrap_or_else(|| placeholder_name(offer.type_id));

        ranked.push(RankedItem {
            type_id: offer.type_id,
            name,
            isk_per_lp: best_price / offer.lp_cost as f64,
        });
    }

    // Stable sort, descending by ratio; ties keep offer-list order.
    ranked.sort_by(|a, b| {
        b.isk_per_lp
            .partial_cmp(&a.isk_per_lp)
            .unwrap_or(Ordering::Equal)
    });

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(type_id: TypeId, lp_cost: i64) -> LoyaltyOffer {
        LoyaltyOffer { type_id, lp_cost }
    }

    fn sell(price: f64) -> SellOrder {
        SellOrder {
            price,
            is_buy_order: false,
        }
    }

    #[test]
    fn ranks_only_items_with_sell_orders() {
        let offers = [offer(1, 10), offer(2, 5)];
        let names = HashMap::from([(1, "Widget".to_string()), (2, "Gadget".to_string())]);
        let orders = HashMap::from([(1, vec![sell(100.0)]), (2, Vec::new())]);

        let ranked = aggregate(&offers, &names, &orders).unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].type_id, 1);
        assert_eq!(ranked[0].name, "Widget");
        assert_eq!(ranked[0].isk_per_lp, 10.0);
    }

    #[test]
    fn item_absent_from_market_results_is_excluded() {
        let offers = [offer(1, 10), offer(2, 5)];
        let names = HashMap::new();
        // No entry at all for item 2, not even an empty vec.
        let orders = HashMap::from([(1, vec![sell(50.0)])]);

        let ranked = aggregate(&offers, &names, &orders).unwrap();

        assert_eq!(ranked.len(), 1);
        assert!(ranked.iter().all(|item| item.type_id != 2));
    }

    #[test]
    fn takes_maximum_sell_price() {
        let offers = [offer(7, 4)];
        let names = HashMap::new();
        let orders = HashMap::from([(7, vec![sell(8.0), sell(20.0), sell(12.0)])]);

        let ranked = aggregate(&offers, &names, &orders).unwrap();

        assert_eq!(ranked[0].isk_per_lp, 5.0);
    }

    #[test]
    fn sorts_descending_by_ratio() {
        let offers = [offer(1, 10), offer(2, 10), offer(3, 10)];
        let names = HashMap::new();
        let orders = HashMap::from([
            (1, vec![sell(50.0)]),
            (2, vec![sell(300.0)]),
            (3, vec![sell(120.0)]),
        ]);

        let ranked = aggregate(&offers, &names, &orders).unwrap();

        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].isk_per_lp >= pair[1].isk_per_lp);
        }
        assert_eq!(ranked[0].type_id, 2);
    }

    #[test]
    fn tied_ratios_keep_offer_order_across_runs() {
        // Eight items, all priced to the same 10.0 ratio: only the
        // offer-list order can break the tie, and it must do so the same
        // way every run.
        let offers: Vec<LoyaltyOffer> = (1..=8).map(|id| offer(id, 10)).collect();
        let names = HashMap::new();
        let orders: HashMap<TypeId, Vec<SellOrder>> =
            (1..=8).map(|id| (id, vec![sell(100.0)])).collect();

        let first = aggregate(&offers, &names, &orders).unwrap();
        let first_ids: Vec<TypeId> = first.iter().map(|item| item.type_id).collect();
        assert_eq!(first_ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);

        for _ in 0..20 {
            let again = aggregate(&offers, &names, &orders).unwrap();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn duplicate_offer_entries_use_the_first_occurrence() {
        let offers = [offer(1, 10), offer(1, 2)];
        let names = HashMap::new();
        let orders = HashMap::from([(1, vec![sell(100.0)])]);

        let ranked = aggregate(&offers, &names, &orders).unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].isk_per_lp, 10.0);
    }

    #[test]
    fn missing_name_gets_placeholder() {
        let offers = [offer(99, 3)];
        let names = HashMap::new();
        let orders = HashMap::from([(99, vec![sell(9.0)])]);

        let ranked = aggregate(&offers, &names, &orders).unwrap();

        assert_eq!(ranked[0].name, "Unknown-99");
    }

    #[test]
    fn zero_lp_cost_is_a_validation_error() {
        let offers = [offer(5, 0)];
        let names = HashMap::new();
        let orders = HashMap::from([(5, vec![sell(10.0)])]);

        let err = aggregate(&offers, &names, &orders).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidLpCost {
                type_id: 5,
                lp_cost: 0
            }
        ));
    }

    #[test]
    fn negative_lp_cost_is_a_validation_error() {
        let offers = [offer(5, -20)];
        let names = HashMap::new();
        let orders = HashMap::from([(5, vec![sell(10.0)])]);

        assert!(aggregate(&offers, &names, &orders).is_err());
    }
}
