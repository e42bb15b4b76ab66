use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serenity::async_trait;
use tracing::{debug, warn};

use super::models::{ApiError, CurrencyRate, DailyFigure, MapData, RegionStat};
use super::Upstream;
use crate::config::Config;

/// HTTP client for the map-data, covid-info and currency endpoints
pub struct UpstreamClient {
    http_client: HttpClient,
    map_data_url: String,
    covid_info_url: String,
    currency_url: String,
}

impl UpstreamClient {
    /// Build a client from the startup configuration
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            map_data_url: config.map_data_url.clone(),
            covid_info_url: config.covid_info_url.clone(),
            currency_url: config.currency_url.clone(),
        })
    }

    /// The covid-info endpoint takes the region code glued onto the base URL
    /// with `=`, without query encoding.
    pub fn covid_info_url(&self, region_code: &str) -> String {
        format!("{}={}", self.covid_info_url, region_code)
    }

    /// GET `url` and decode the body as `T`
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Upstream {} answered {}", url, status);
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Request(format!("Failed to read response body: {}", e)))?;

        serde_json::from_slice::<T>(&bytes)
            .map_err(|e| ApiError::Deserialization(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl Upstream for UpstreamClient {
    async fn map_data(&self) -> Result<Vec<RegionStat>, ApiError> {
        let data: MapData = self.get_json(&self.map_data_url).await?;
        debug!("Map data returned {} regions", data.items.len());
        Ok(data.items)
    }

    async fn covid_info(&self, region_code: &str) -> Result<Vec<DailyFigure>, ApiError> {
        let url = self.covid_info_url(region_code);
        let figures: Vec<DailyFigure> = self.get_json(&url).await?;
        Ok(order_most_recent_first(figures))
    }

    async fn currencies(&self) -> Result<Vec<CurrencyRate>, ApiError> {
        self.get_json(&self.currency_url).await
    }
}

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d.%m.%Y"];

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw.trim(), fmt).ok())
}

/// Sort a daily series newest first so that index 0 is "today" and index 1
/// is "yesterday". When any date fails to parse the upstream order is kept.
pub fn order_most_recent_first(mut figures: Vec<DailyFigure>) -> Vec<DailyFigure> {
    let dates: Option<Vec<NaiveDate>> = figures.iter().map(|f| parse_date(&f.date)).collect();

    match dates {
        Some(_) => {
            figures.sort_by_key(|f| std::cmp::Reverse(parse_date(&f.date)));
        }
        None => {
            warn!("Daily series has unparseable dates, keeping upstream order");
        }
    }

    figures
}
