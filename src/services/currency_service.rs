use crate::api::upstream::{ApiError, CurrencyRate, Upstream};
use tracing::debug;

/// Fetch current exchange rates and render them in upstream order
pub async fn get_currency_report<U: Upstream + ?Sized>(upstream: &U) -> Result<String, ApiError> {
    let rates = upstream.currencies().await?;
    debug!("Fetched {} currency rates", rates.len());
    Ok(format_currencies(&rates))
}

/// Three lines per currency: code, sale price, buy price
pub fn format_currencies(rates: &[CurrencyRate]) -> String {
    rates
        .iter()
        .map(|rate| {
            format!(
                "{}\n- sale {} {}\n- buy {} {}\n",
                rate.ccy, rate.sale, rate.base_ccy, rate.buy, rate.base_ccy
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(ccy: &str, buy: &str, sale: &str) -> CurrencyRate {
        CurrencyRate {
            ccy: ccy.to_string(),
            base_ccy: "UAH".to_string(),
            buy: buy.to_string(),
            sale: sale.to_string(),
        }
    }

    #[test]
    fn test_format_currencies_keeps_order() {
        let report = format_currencies(&[
            rate("USD", "27.70", "28.10"),
            rate("EUR", "33.20", "33.80"),
            rate("BTC", "35000", "38000"),
        ]);

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "USD");
        assert_eq!(lines[1], "- sale 28.10 UAH");
        assert_eq!(lines[2], "- buy 27.70 UAH");
        assert_eq!(lines[3], "EUR");
        assert_eq!(lines[6], "BTC");
    }

    #[test]
    fn test_format_currencies_empty() {
        assert_eq!(format_currencies(&[]), "");
    }
}
