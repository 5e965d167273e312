use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Coffee::Table)
                    .if_not_exists()
                    .col(pk_auto(Coffee::Id))
                    .col(string(Coffee::Name))
                    .col(string(Coffee::Brand))
                    .col(integer(Coffee::Recommendations).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_coffee_name")
                    .table(Coffee::Table)
                    .col(Coffee::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Coffee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Coffee {
    Table,
    Id,
    Name,
    Brand,
    Recommendations,
}
