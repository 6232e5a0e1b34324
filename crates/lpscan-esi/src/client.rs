use crate::errors::Result;
use crate::transport::EsiTransport;
use log::{debug, info, warn};
use lpscan_core::models::{LoyaltyOffer, RawLoyaltyOffer, SellOrder, TypeId};
use lpscan_core::ranking::placeholder_name;
use serde_json::Value;

/// Default ESI base URL (Tranquility).
pub const DEFAULT_BASE_URL: &str = "https://esi.evetech.net";

/// HTTP client for the handful of ESI endpoints the scanner consumes.
#[derive(Debug, Clone)]
pub struct EsiClient<T> {
    transport: T,
    base_url: String,
}

impl<T: EsiTransport> EsiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!("Creating EsiClient with base URL: {}", base_url);
        Self {
            transport,
            base_url,
        }
    }

    /// Fetch the LP store offer list for an NPC corporation.
    ///
    /// This is the one fetch that is fatal on failure: without the offer
    /// list there is nothing to rank. Entries missing an identifier or a
    /// cost are dropped individually.
    pub async fn fetch_offers(&self, corp_id: i64) -> Result<Vec<LoyaltyOffer>> {
        let url = format!("{}/v1/loyalty/stores/{}/offers/", self.base_url, corp_id);
        let body = self.transport.get_json(&url).await?;

        let raw: Vec<RawLoyaltyOffer> = serde_json::from_value(body)?;
        let total = raw.len();
        let offers: Vec<LoyaltyOffer> = raw
            .into_iter()
            .filter_map(RawLoyaltyOffer::into_offer)
            .collect();

        if offers.len() < total {
            warn!(
                "Dropped {} malformed LP store offer(s)",
                total - offers.len()
            );
        }
        info!(
            "Fetched {} LP store offers for corporation {}",
            offers.len(),
            corp_id
        );

        Ok(offers)
    }

    /// Resolve the display name for an item type.
    ///
    /// Never fails outward: any request or decode problem is logged and the
    /// item keeps a synthetic `Unknown-{id}` name for the rest of the run.
    pub async fn resolve_name(&self, type_id: TypeId) -> (TypeId, String) {
        let url = format!("{}/v3/universe/types/{}/", self.base_url, type_id);

        match self.transport.get_json(&url).await {
            Ok(body) => match body.get("name").and_then(Value::as_str) {
                Some(name) => (type_id, name.to_string()),
                None => {
                    warn!("Type {} response carried no name field", type_id);
                    (type_id, placeholder_name(type_id))
                }
            },
            Err(e) => {
                warn!("Error fetching item name for type {}: {}", type_id, e);
                (type_id, placeholder_name(type_id))
            }
        }
    }

    /// Fetch the active sell orders for an item in a market region.
    ///
    /// Never fails outward: failures are logged and degrade to an empty
    /// order list, which later excludes the item from the ranking.
    pub async fn fetch_sell_orders(
        &self,
        region_id: i64,
        type_id: TypeId,
    ) -> (TypeId, Vec<SellOrder>) {
        let url = format!(
            "{}/v1/markets/{}/orders/?datasource=tranquility&order_type=sell&type_id={}",
            self.base_url, region_id, type_id
        );

        let orders = match self.fetch_orders(&url).await {
            Ok(orders) => orders,
            Err(e) => {
                warn!("Error fetching market data for type {}: {}", type_id, e);
                Vec::new()
            }
        };

        (type_id, orders)
    }

    async fn fetch_orders(&self, url: &str) -> Result<Vec<SellOrder>> {
        let body = self.transport.get_json(url).await?;
        let orders: Vec<SellOrder> = serde_json::from_value(body)?;

        // The endpoint is asked for sell orders only, but the buy-side
        // filter is applied here too rather than trusted to the server.
        Ok(orders.into_iter().filter(|o| !o.is_buy_order).collect())
    }
}
