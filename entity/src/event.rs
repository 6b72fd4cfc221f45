use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub channel_id: String,
    #[sea_orm(unique)]
    pub message_id: String,
    pub creator_id: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub scheduled_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_signup::Entity")]
    EventSignup,
}

impl Related<super::event_signup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventSignup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
