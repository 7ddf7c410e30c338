use sea_orm::entity::prelude::*;

/// Registered electric vehicles per region and year.
///
/// The region summary reads this table through a hand-written join; the
/// entity mirrors the schema for direct reads and tests.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ev_registered_yearly")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "zname")]
    pub region_name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub year: i32,
    pub vehicle_count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
