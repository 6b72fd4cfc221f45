use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roster_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub user_id: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::roster_character::Entity")]
    RosterCharacter,
}

impl Related<super::roster_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RosterCharacter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
