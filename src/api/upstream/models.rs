use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Response from the map-data endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapData {
    #[serde(rename = "Items", default)]
    pub items: Vec<RegionStat>,
}

/// Cumulative totals for one region as reported by the map-data endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegionStat {
    pub confirmed: i64,
    pub deaths: i64,
    pub recovered: i64,
    pub iso_code: String,
    pub location_name: String,
    pub lat: String,
    pub lng: String,
    pub new: String,
    pub observations: String,
}

/// One day of cumulative figures from the covid-info endpoint.
///
/// The endpoint sends the counters as JSON strings (`"sick": "5000"`);
/// plain numbers are accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DailyFigure {
    pub date: String,
    #[serde(deserialize_with = "i64_from_str_or_number")]
    pub sick: i64,
    #[serde(deserialize_with = "i64_from_str_or_number")]
    pub healed: i64,
    #[serde(deserialize_with = "i64_from_str_or_number")]
    pub died: i64,
}

/// Buy/sell rate of one currency against its base currency
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CurrencyRate {
    pub ccy: String,
    pub base_ccy: String,
    pub buy: String,
    pub sale: String,
}

fn i64_from_str_or_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse::<i64>().map_err(serde::de::Error::custom),
    }
}

/// Errors returned by the upstream data clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: DNS, connect, timeout, broken body
    #[error("Request Error: {0}")]
    Request(String),
    /// Non-2xx response
    #[error("HTTP Error ({status}): {body}")]
    Http { status: u16, body: String },
    /// Body could not be decoded into the expected shape
    #[error("Deserialization Error: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_figure_accepts_string_counters() {
        let raw = r#"[{"date":"2021-01-02","sick":"5000","healed":"4000","died":"100"}]"#;
        let figures: Vec<DailyFigure> = serde_json::from_str(raw).unwrap();

        assert_eq!(figures.len(), 1);
        assert_eq!(figures[0].date, "2021-01-02");
        assert_eq!(figures[0].sick, 5000);
        assert_eq!(figures[0].healed, 4000);
        assert_eq!(figures[0].died, 100);
    }

    #[test]
    fn test_daily_figure_accepts_numeric_counters() {
        let raw = r#"{"date":"2021-01-02","sick":5000,"healed":4000,"died":100}"#;
        let figure: DailyFigure = serde_json::from_str(raw).unwrap();
        assert_eq!(figure.sick, 5000);
    }

    #[test]
    fn test_daily_figure_rejects_non_numeric_text() {
        let raw = r#"{"date":"2021-01-02","sick":"lots","healed":"1","died":"1"}"#;
        assert!(serde_json::from_str::<DailyFigure>(raw).is_err());
    }

    #[test]
    fn test_map_data_items() {
        let raw = r#"{"Items":[
            {"Confirmed":10,"Deaths":1,"Recovered":5,"IsoCode":"RU-MOW","LocationName":"Москва",
             "Lat":"55.75","Lng":"37.61","New":"","Observations":""},
            {"Confirmed":20,"Deaths":2,"Recovered":10,"IsoCode":"RU-YAR"}
        ]}"#;
        let data: MapData = serde_json::from_str(raw).unwrap();

        assert_eq!(data.items.len(), 2);
        assert_eq!(data.items[0].iso_code, "RU-MOW");
        assert_eq!(data.items[0].location_name, "Москва");
        assert_eq!(data.items[1].confirmed, 20);
        assert_eq!(data.items[1].lat, "");
    }

    #[test]
    fn test_currency_rate_base_ccy() {
        let raw = r#"[{"ccy":"USD","base_ccy":"UAH","buy":"27.70","sale":"28.10"}]"#;
        let rates: Vec<CurrencyRate> = serde_json::from_str(raw).unwrap();

        assert_eq!(rates[0].ccy, "USD");
        assert_eq!(rates[0].base_ccy, "UAH");
        assert_eq!(rates[0].buy, "27.70");
        assert_eq!(rates[0].sale, "28.10");
    }
}
