use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RosterMember::Table)
                    .if_not_exists()
                    .col(pk_auto(RosterMember::Id))
                    .col(string(RosterMember::GuildId))
                    .col(string(RosterMember::UserId))
                    .col(
                        timestamp_with_time_zone(RosterMember::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_roster_member_guild_user")
                    .table(RosterMember::Table)
                    .col(RosterMember::GuildId)
                    .col(RosterMember::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_roster_member_guild_user")
                    .table(RosterMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RosterMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RosterMember {
    Table,
    Id,
    GuildId,
    UserId,
    CreatedAt,
}
