use crate::address::StationAddress;
use crate::entities::{prelude::*, region_map, stations};
use crate::error::Result;
use crate::summary::RegionSummary;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryOrder, QuerySelect,
    Statement,
};
use tracing::{debug, info};

/// Stations joined to their region name and that region's registrations for
/// one year. Regions without a registration row for the year drop out of the
/// inner join.
const REGION_SUMMARY_SQL: &str = r"
    SELECT
        r.zname AS region,
        COUNT(DISTINCT s.statId) AS station_count,
        e.vehicle_count AS vehicle_count
    FROM stations s
    JOIN region_map r ON s.zcode = r.zcode
    JOIN ev_registered_yearly e ON r.zname = e.zname
    WHERE e.year = ?
    GROUP BY r.zname, e.vehicle_count
    ORDER BY r.zname
";

#[derive(Debug, FromQueryResult)]
struct RegionCountRow {
    region: String,
    station_count: i64,
    vehicle_count: i64,
}

pub async fn load_region_summary(db: &DatabaseConnection, year: i32) -> Result<Vec<RegionSummary>> {
    let statement = Statement::from_sql_and_values(
        db.get_database_backend(),
        REGION_SUMMARY_SQL,
        [year.into()],
    );

    let rows = RegionCountRow::find_by_statement(statement).all(db).await?;
    info!("Loaded {} region summaries for {}", rows.len(), year);

    rows.into_iter()
        .map(|r| RegionSummary::from_counts(r.region, r.station_count, r.vehicle_count))
        .collect()
}

pub async fn load_station_addresses(db: &DatabaseConnection) -> Result<Vec<StationAddress>> {
    let rows: Vec<(String, String, Option<String>)> = Stations::find()
        .select_only()
        .column(stations::Column::StationId)
        .column(stations::Column::Name)
        .column(stations::Column::Address)
        .order_by_asc(stations::Column::StationId)
        .into_tuple()
        .all(db)
        .await?;

    info!("Loaded {} station addresses", rows.len());

    Ok(rows
        .into_iter()
        .map(|(id, name, address)| StationAddress::new(id, name, address))
        .collect())
}

/// Looks a station up by identifier together with its region mapping.
/// `None` when no station has that identifier.
pub async fn find_station(
    db: &DatabaseConnection,
    station_id: &str,
) -> Result<Option<(stations::Model, Option<region_map::Model>)>> {
    let found = Stations::find_by_id(station_id)
        .find_also_related(RegionMap)
        .one(db)
        .await?;

    if found.is_none() {
        debug!("No station with id {}", station_id);
    }

    Ok(found)
}
