use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_roster_member_table::RosterMember;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RosterCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(RosterCharacter::Id))
                    .col(integer(RosterCharacter::MemberId))
                    .col(string(RosterCharacter::Role))
                    .col(string(RosterCharacter::WowClass))
                    .col(boolean(RosterCharacter::IsMain).default(false))
                    .col(
                        timestamp_with_time_zone(RosterCharacter::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_roster_character_member_id")
                            .from(RosterCharacter::Table, RosterCharacter::MemberId)
                            .to(RosterMember::Table, RosterMember::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A member can register each role + class pair once
        manager
            .create_index(
                Index::create()
                    .name("idx_roster_character_unique")
                    .table(RosterCharacter::Table)
                    .col(RosterCharacter::MemberId)
                    .col(RosterCharacter::Role)
                    .col(RosterCharacter::WowClass)
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
                    .name("idx_roster_character_unique")
                    .table(RosterCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RosterCharacter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RosterCharacter {
    Table,
    Id,
    MemberId,
    Role,
    WowClass,
    IsMain,
    CreatedAt,
}
