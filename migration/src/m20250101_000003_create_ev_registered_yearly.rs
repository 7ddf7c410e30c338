use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EvRegisteredYearly::Table)
                    .if_not_exists()
                    .col(string(EvRegisteredYearly::Zname))
                    .col(integer(EvRegisteredYearly::Year))
                    .col(big_integer(EvRegisteredYearly::VehicleCount))
                    .primary_key(
                        Index::create()
                            .col(EvRegisteredYearly::Zname)
                            .col(EvRegisteredYearly::Year),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EvRegisteredYearly::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EvRegisteredYearly {
    Table,
    #[sea_orm(iden = "zname")]
    Zname,
    #[sea_orm(iden = "year")]
    Year,
    #[sea_orm(iden = "vehicle_count")]
    VehicleCount,
}
