use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stations::Table)
                    .if_not_exists()
                    .col(string(Stations::StatId).primary_key())
                    .col(string(Stations::StatNm))
                    .col(string_null(Stations::Addr))
                    .col(double_null(Stations::Lat))
                    .col(double_null(Stations::Lng))
                    .col(string_null(Stations::BusiNm))
                    .col(integer_null(Stations::Year))
                    .col(string_null(Stations::Zcode))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stations_zcode")
                    .table(Stations::Table)
                    .col(Stations::Zcode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stations::Table).to_owned())
            .await
    }
}

/// Column names follow the charging-station registry export.
#[derive(DeriveIden)]
enum Stations {
    Table,
    #[sea_orm(iden = "statId")]
    StatId,
    #[sea_orm(iden = "statNm")]
    StatNm,
    #[sea_orm(iden = "addr")]
    Addr,
    #[sea_orm(iden = "lat")]
    Lat,
    #[sea_orm(iden = "lng")]
    Lng,
    #[sea_orm(iden = "busiNm")]
    BusiNm,
    #[sea_orm(iden = "year")]
    Year,
    #[sea_orm(iden = "zcode")]
    Zcode,
}
