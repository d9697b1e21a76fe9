use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

use super::{event_category, location};

/// Status value of events visible in listings.
pub const STATUS_ACTIVE: i16 = 1;

/// A hosted event. Holds foreign-key references to its category and
/// location; it owns neither.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub display_picture: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub hosted_from: NaiveDateTime,
    pub hosted_to: NaiveDateTime,
    pub venue: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub ticket_amount: Decimal,
    /// 1 = active; only active events are listed.
    pub status: i16,
    pub capacity: i32,
    pub tickets_booked: i32,
    pub category_id: i32,
    pub location_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "event_category::Entity",
        from = "Column::CategoryId",
        to = "event_category::Column::Id",
        on_delete = "Restrict"
    )]
    Category,
    #[sea_orm(
        belongs_to = "location::Entity",
        from = "Column::LocationId",
        to = "location::Column::Id",
        on_delete = "Restrict"
    )]
    Location,
}

impl Related<event_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
