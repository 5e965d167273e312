use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flavor::Table)
                    .if_not_exists()
                    .col(pk_auto(Flavor::Id))
                    .col(string_uniq(Flavor::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flavor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flavor {
    Table,
    Id,
    Name,
}
