pub mod client;
pub mod models;

pub use client::UpstreamClient;
pub use models::{ApiError, CurrencyRate, DailyFigure, RegionStat};

use serenity::async_trait;

/// Read-only access to the three upstream data sources.
///
/// Every call hits the network; nothing is cached between calls.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Per-region cumulative totals from the map-data endpoint
    async fn map_data(&self) -> Result<Vec<RegionStat>, ApiError>;

    /// Daily series for one region code, most recent day first
    async fn covid_info(&self, region_code: &str) -> Result<Vec<DailyFigure>, ApiError>;

    /// Currency buy/sell rates in upstream order
    async fn currencies(&self) -> Result<Vec<CurrencyRate>, ApiError>;
}
