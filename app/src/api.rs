use crate::address::StationAddress;
use crate::summary::RegionSummary;
use chrono::{DateTime, Utc};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use crate::{api_impl, cache, config, db};

/// Region coverage for the configured registration year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryDto {
    pub target_year: i32,
    pub loaded_at: DateTime<Utc>,
    pub regions: Vec<RegionSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationDetailDto {
    pub station_id: String,
    pub name: String,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub operator: Option<String>,
    pub install_year: Option<i32>,
    pub region_name: Option<String>,
}

#[server]
pub async fn get_region_summary() -> Result<SummaryDto, ServerFnError> {
    let db = db::get_db_from_context()?;
    let cache = cache::get_cache_from_context()?;
    let config = config::get_config_from_context()?;
    api_impl::region_summary_impl(&db, &cache, config.target_year)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Every station with its decomposed address, for the drill-down selectors.
#[server]
pub async fn get_station_addresses() -> Result<Vec<StationAddress>, ServerFnError> {
    let db = db::get_db_from_context()?;
    let cache = cache::get_cache_from_context()?;
    api_impl::station_addresses_impl(&db, &cache)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn get_station_detail(
    station_id: String,
) -> Result<Option<StationDetailDto>, ServerFnError> {
    let db = db::get_db_from_context()?;
    api_impl::station_detail_impl(&db, &station_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Drop every cached query result so the next page load reads the store again.
#[server]
pub async fn refresh_data() -> Result<(), ServerFnError> {
    let cache = cache::get_cache_from_context()?;
    api_impl::refresh_impl(&cache).await;
    Ok(())
}
