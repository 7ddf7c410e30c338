//! Bodies of the server functions, taking their handles explicitly so they
//! can be exercised without the `#[server]` macro.

use crate::address::StationAddress;
use crate::api::{StationDetailDto, SummaryDto};
use crate::cache::DashboardCache;
use crate::entities::{region_map, stations};
use crate::error::Result;
use crate::repositories;
use sea_orm::DatabaseConnection;
use tracing::debug;

// === DTO Conversions ===

/// Convert a station and its region mapping to a DTO.
pub fn station_to_dto(
    station: stations::Model,
    region: Option<region_map::Model>,
) -> StationDetailDto {
    StationDetailDto {
        station_id: station.station_id,
        name: station.name,
        address: station.address,
        lat: station.lat,
        lng: station.lng,
        operator: station.operator,
        install_year: station.install_year,
        region_name: region.map(|r| r.region_name),
    }
}

// === Cached Reads ===

pub async fn region_summary_impl(
    db: &DatabaseConnection,
    cache: &DashboardCache,
    target_year: i32,
) -> Result<SummaryDto> {
    let cached = cache
        .summaries
        .get_or_try_load(target_year, || {
            repositories::load_region_summary(db, target_year)
        })
        .await?;

    Ok(SummaryDto {
        target_year,
        loaded_at: cached.loaded_at,
        regions: cached.value.as_ref().clone(),
    })
}

pub async fn station_addresses_impl(
    db: &DatabaseConnection,
    cache: &DashboardCache,
) -> Result<Vec<StationAddress>> {
    let cached = cache
        .addresses
        .get_or_try_load((), || repositories::load_station_addresses(db))
        .await?;

    Ok(cached.value.as_ref().clone())
}

pub async fn refresh_impl(cache: &DashboardCache) {
    cache.invalidate_all().await;
}

// === Detail Lookup ===

/// Single-row lookups always go to the store; they are not cached.
pub async fn station_detail_impl(
    db: &DatabaseConnection,
    station_id: &str,
) -> Result<Option<StationDetailDto>> {
    if station_id.is_empty() {
        debug!("Empty station id, skipping lookup");
        return Ok(None);
    }

    let found = repositories::find_station(db, station_id).await?;
    Ok(found.map(|(station, region)| station_to_dto(station, region)))
}
