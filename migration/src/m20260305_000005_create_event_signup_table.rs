use sea_orm_migration::{prelude::*, schema::*};

use super::m20260305_000004_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventSignup::Table)
                    .if_not_exists()
                    .col(pk_auto(EventSignup::Id))
                    .col(integer(EventSignup::EventId))
                    .col(string(EventSignup::UserId))
                    .col(string(EventSignup::Role))
                    .col(boolean(EventSignup::IsBench).default(false))
                    .col(
                        timestamp_with_time_zone(EventSignup::SignedUpAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_signup_event_id")
                            .from(EventSignup::Table, EventSignup::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One signup per user per event
        manager
            .create_index(
                Index::create()
                    .name("idx_event_signup_unique")
                    .table(EventSignup::Table)
                    .col(EventSignup::EventId)
                    .col(EventSignup::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Slot counting and bench lookups filter on (event, role, bench)
        manager
            .create_index(
                Index::create()
                    .name("idx_event_signup_slot")
                    .table(EventSignup::Table)
                    .col(EventSignup::EventId)
                    .col(EventSignup::Role)
                    .col(EventSignup::IsBench)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_event_signup_slot")
                    .table(EventSignup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_event_signup_unique")
                    .table(EventSignup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EventSignup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EventSignup {
    Table,
    Id,
    EventId,
    UserId,
    Role,
    IsBench,
    SignedUpAt,
}
