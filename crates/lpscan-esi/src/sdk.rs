use crate::client::EsiClient;
use crate::errors::Result;
use crate::fanout::{self, DEFAULT_CONCURRENCY};
use crate::transport::EsiTransport;
use log::info;
use lpscan_core::models::{RankedItem, TypeId};
use lpscan_core::ranking;
use std::collections::HashSet;

/// The Forge, home of Jita.
pub const DEFAULT_REGION_ID: i64 = 10000002;

/// Caldari Provisions.
pub const DEFAULT_CORP_ID: i64 = 1000002;

/// Scan parameters: which store to price, against which market.
#[derive(Debug, Clone)]
pub struct ScanParams {
    pub corp_id: i64,
    pub region_id: i64,
    pub max_concurrency: usize,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            corp_id: DEFAULT_CORP_ID,
            region_id: DEFAULT_REGION_ID,
            max_concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// Pipeline facade: one `run` call performs the whole scan and returns the
/// ranked list. Console output stays with the caller.
pub struct ScanRunner<T> {
    client: EsiClient<T>,
}

impl<T: EsiTransport> ScanRunner<T> {
    pub fn new(client: EsiClient<T>) -> Self {
        Self { client }
    }

    /// Run a full scan: offers, then names, then market data, then the
    /// ranking. The offers fetch is fatal on failure; per-item lookups are
    /// absorbed by the client and degrade to placeholders or exclusion.
    pub async fn run(&self, params: &ScanParams) -> Result<Vec<RankedItem>> {
        let offers = self.client.fetch_offers(params.corp_id).await?;

        // One lookup per distinct type; the aggregator walks the offer
        // list itself so ranking order stays deterministic.
        let mut ids: Vec<TypeId> = Vec::with_capacity(offers.len());
        let mut seen = HashSet::new();
        for offer in &offers {
            if seen.insert(offer.type_id) {
                ids.push(offer.type_id);
            }
        }
        info!("Processing {} items from LP store", ids.len());

        // Two sequential barriers over the same key set: every name
        // resolves before any market lookup starts.
        let names = fanout::run_all(ids.iter().copied(), params.max_concurrency, |id| {
            self.client.resolve_name(id)
        })
        .await;

        let orders = fanout::run_all(ids.iter().copied(), params.max_concurrency, |id| {
            self.client.fetch_sell_orders(params.region_id, id)
        })
        .await;

        let ranked = ranking::aggregate(&offers, &names, &orders)?;
        info!("Ranked {} of {} items", ranked.len(), ids.len());

        Ok(ranked)
    }
}
