use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roster_character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_id: i32,
    pub role: String,
    pub wow_class: String,
    pub is_main: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::roster_member::Entity",
        from = "Column::MemberId",
        to = "super::roster_member::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RosterMember,
}

impl Related<super::roster_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RosterMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
