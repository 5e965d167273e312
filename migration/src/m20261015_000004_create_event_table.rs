use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Type))
                    .col(string(Event::Name))
                    .col(json(Event::Payload))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_name")
                    .table(Event::Table)
                    .col(Event::Name)
                    .to_owned(),
            )
            .await?;

        // Lookups by action name and category together, e.g. all "recommend_coffee" coffee events
        manager
            .create_index(
                Index::create()
                    .name("idx_event_name_type")
                    .table(Event::Table)
                    .col(Event::Name)
                    .col(Event::Type)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Type,
    Name,
    Payload,
}
