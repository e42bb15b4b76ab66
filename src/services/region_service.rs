use crate::api::upstream::{ApiError, DailyFigure, Upstream};
use crate::regions::RegionCatalog;
use crate::utils::{format_delta, format_thousands};
use tracing::debug;

/// Fetch the daily series for `region_code` and render the region report.
///
/// The series is expected newest first: element 0 is "today", element 1 is
/// "yesterday". Missing elements are treated as absent days.
pub async fn get_region_report<U: Upstream + ?Sized>(
    upstream: &U,
    catalog: &RegionCatalog,
    region_code: &str,
) -> Result<String, ApiError> {
    let title = catalog.title_for(region_code).await;
    let figures = upstream.covid_info(region_code).await?;

    debug!("Region {} returned {} daily figures", region_code, figures.len());

    Ok(format_region(&title, figures.first(), figures.get(1)))
}

fn is_present(day: Option<&DailyFigure>) -> Option<&DailyFigure> {
    day.filter(|d| !d.date.is_empty())
}

fn format_absolute(title: &str, day: &DailyFigure) -> String {
    format!(
        "{}\n \tДата: {}\n \tУмерло: {}\n \tВыявлено: {}\n \tВыздоровело: {}\n",
        title,
        day.date,
        format_thousands(day.died),
        format_thousands(day.sick),
        format_thousands(day.healed),
    )
}

/// Render a region report from the two most recent days.
///
/// With a dated "today" every metric carries its change since "yesterday".
/// Without one, a dated "yesterday" is shown as absolute values only.
/// With neither, the report is empty. A series holding a single day has
/// nothing to diff against and is shown without changes.
/// Changes wrap on overflow instead of panicking.
pub fn format_region(
    title: &str,
    today: Option<&DailyFigure>,
    yesterday: Option<&DailyFigure>,
) -> String {
    match (is_present(today), yesterday) {
        (Some(today), Some(previous)) => format!(
            "{}\n \tДата: {}\n \tУмерло: {} ({})\n \tВыявлено: {} ({})\n \tВыздоровело: {} ({})\n",
            title,
            today.date,
            format_thousands(today.died),
            format_delta(today.died.wrapping_sub(previous.died)),
            format_thousands(today.sick),
            format_delta(today.sick.wrapping_sub(previous.sick)),
            format_thousands(today.healed),
            format_delta(today.healed.wrapping_sub(previous.healed)),
        ),
        (Some(today), None) => format_absolute(title, today),
        (None, _) => match is_present(yesterday) {
            Some(yesterday) => format_absolute(title, yesterday),
            None => String::new(),
        },
    }
}
