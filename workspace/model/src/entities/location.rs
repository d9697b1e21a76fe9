use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

/// A city where events can be hosted.
/// Referenced by events through `location_id`; has no update or delete surface.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub city: String,
    #[sea_orm(unique)]
    pub state: String,
    #[sea_orm(unique)]
    pub country: String,
    #[sea_orm(unique)]
    pub pincode: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Many events may be hosted at one location.
    #[sea_orm(has_many = "super::event::Entity")]
    Event,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
