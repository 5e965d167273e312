use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261014_000001_create_coffee_table::Coffee, m20261014_000002_create_flavor_table::Flavor,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CoffeeFlavor::Table)
                    .if_not_exists()
                    .col(integer(CoffeeFlavor::CoffeeId))
                    .col(integer(CoffeeFlavor::FlavorId))
                    .primary_key(
                        Index::create()
                            .col(CoffeeFlavor::CoffeeId)
                            .col(CoffeeFlavor::FlavorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_coffee_flavor_coffee_id")
                            .from(CoffeeFlavor::Table, CoffeeFlavor::CoffeeId)
                            .to(Coffee::Table, Coffee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_coffee_flavor_flavor_id")
                            .from(CoffeeFlavor::Table, CoffeeFlavor::FlavorId)
                            .to(Flavor::Table, Flavor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CoffeeFlavor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CoffeeFlavor {
    Table,
    CoffeeId,
    FlavorId,
}
