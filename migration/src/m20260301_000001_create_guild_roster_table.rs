use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildRoster::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildRoster::Id))
                    .col(string(GuildRoster::GuildId))
                    .col(string(GuildRoster::ChannelId))
                    .col(string(GuildRoster::MessageId))
                    .col(timestamp_with_time_zone(GuildRoster::CreatedAt))
                    .col(timestamp_with_time_zone(GuildRoster::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One roster message per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_guild_roster_guild_id")
                    .table(GuildRoster::Table)
                    .col(GuildRoster::GuildId)
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
                    .name("idx_guild_roster_guild_id")
                    .table(GuildRoster::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GuildRoster::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GuildRoster {
    Table,
    Id,
    GuildId,
    ChannelId,
    MessageId,
    CreatedAt,
    UpdatedAt,
}
