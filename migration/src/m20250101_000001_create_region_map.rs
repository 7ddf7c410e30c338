use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RegionMap::Table)
                    .if_not_exists()
                    .col(string(RegionMap::Zcode).primary_key())
                    .col(string(RegionMap::Zname))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_region_map_zname")
                    .table(RegionMap::Table)
                    .col(RegionMap::Zname)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RegionMap::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RegionMap {
    Table,
    #[sea_orm(iden = "zcode")]
    Zcode,
    #[sea_orm(iden = "zname")]
    Zname,
}
