use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "statId")]
    pub station_id: String,
    #[sea_orm(column_name = "statNm")]
    pub name: String,
    #[sea_orm(column_name = "addr")]
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[sea_orm(column_name = "busiNm")]
    pub operator: Option<String>,
    #[sea_orm(column_name = "year")]
    pub install_year: Option<i32>,
    #[sea_orm(column_name = "zcode")]
    pub region_code: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::region_map::Entity",
        from = "Column::RegionCode",
        to = "super::region_map::Column::RegionCode"
    )]
    RegionMap,
}

impl Related<super::region_map::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RegionMap.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
