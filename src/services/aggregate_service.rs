use crate::api::upstream::{ApiError, RegionStat, Upstream};
use crate::models::AggregateTotals;
use crate::utils::format_thousands;
use tracing::debug;

/// Fetch the map dataset and render the country-wide totals
pub async fn get_aggregate_report<U: Upstream + ?Sized>(upstream: &U) -> Result<String, ApiError> {
    let stats = upstream.map_data().await?;
    debug!("Aggregating {} regions", stats.len());
    Ok(format_aggregate(&stats))
}

/// Sum cumulative totals across every region, wrapping on overflow
pub fn sum_totals(stats: &[RegionStat]) -> AggregateTotals {
    stats.iter().fold(AggregateTotals::default(), |acc, s| AggregateTotals {
        confirmed: acc.confirmed.wrapping_add(s.confirmed),
        deaths: acc.deaths.wrapping_add(s.deaths),
        recovered: acc.recovered.wrapping_add(s.recovered),
    })
}

pub fn format_aggregate(stats: &[RegionStat]) -> String {
    let totals = sum_totals(stats);
    format!(
        "Общее по России: \n \tУмерло: {}\n \tВыявлено: {}\n \tВыздоровело: {} \n",
        format_thousands(totals.deaths),
        format_thousands(totals.confirmed),
        format_thousands(totals.recovered),
    )
}
