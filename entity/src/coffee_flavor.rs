use sea_orm::entity::prelude::*;

/// Join table for the many-to-many relation between coffees and flavors.
///
/// Rows are owned by the coffee side: removing a coffee removes its join rows,
/// never the flavors they point at.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "coffee_flavor")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub coffee_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub flavor_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::coffee::Entity",
        from = "Column::CoffeeId",
        to = "super::coffee::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Coffee,
    #[sea_orm(
        belongs_to = "super::flavor::Entity",
        from = "Column::FlavorId",
        to = "super::flavor::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Flavor,
}

impl Related<super::coffee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coffee.def()
    }
}

impl Related<super::flavor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flavor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
