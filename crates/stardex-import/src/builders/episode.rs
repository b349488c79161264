//! Episode record builder

use crate::{BuildError, NumberPolicy};
use stardex_domain::{Episode, SeriesLookup, Sidebar};

pub(super) fn build<L>(
    title: &str,
    sidebar: &Sidebar,
    lookup: &L,
    policy: NumberPolicy,
) -> Result<Episode, BuildError>
where
    L: SeriesLookup + ?Sized,
{
    let abbreviation = scalar_any(sidebar, &["sSeries", "Series"])
        .ok_or(BuildError::MissingField("sSeries"))?;
    let series_id = lookup
        .lookup(abbreviation)
        .ok_or_else(|| BuildError::UnknownSeries(abbreviation.to_string()))?;

    let season_num = parse_number("nSeason", scalar_any(sidebar, &["nSeason", "Season"]), policy)?;
    let episode_num = parse_number(
        "nEpisode",
        scalar_any(sidebar, &["nEpisode", "Episode"]),
        policy,
    )?;

    Ok(Episode {
        title: title.to_string(),
        series_id,
        season_num,
        episode_num,
        serial_number: scalar_any(sidebar, &["sProductionSerialNumber"]).map(str::to_string),
        air_date: scalar_any(sidebar, &["nSerialAirdate"]).map(str::to_string),
    })
}

/// First non-empty scalar among the candidate field names. Older sidebar
/// revisions drop the Hungarian prefix, so both spellings are accepted.
fn scalar_any<'a>(sidebar: &'a Sidebar, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .find_map(|name| sidebar.scalar(name))
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn parse_number(
    field: &'static str,
    value: Option<&str>,
    policy: NumberPolicy,
) -> Result<i32, BuildError> {
    let value = value.unwrap_or_default();
    match value.parse::<i32>() {
        Ok(number) => Ok(number),
        Err(_) => match policy {
            NumberPolicy::CoerceToZero => Ok(0),
            NumberPolicy::Skip => Err(BuildError::InvalidNumber {
                field,
                value: value.to_string(),
            }),
        },
    }
}
