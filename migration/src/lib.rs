pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_region_map;
mod m20250101_000002_create_stations;
mod m20250101_000003_create_ev_registered_yearly;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_region_map::Migration),
            Box::new(m20250101_000002_create_stations::Migration),
            Box::new(m20250101_000003_create_ev_registered_yearly::Migration),
        ]
    }
}
