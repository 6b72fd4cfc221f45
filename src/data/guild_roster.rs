//! Guild roster board data repository for database operations.
//!
//! This module provides the `GuildRosterRepository` for tracking the single live roster
//! message of each guild. A guild has at most one board; setting up the roster again in
//! another channel moves it.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::{
    error::AppError,
    model::roster::{GuildRosterBoard, UpsertGuildRosterBoardParam},
};

/// Repository providing database operations for guild roster boards.
pub struct GuildRosterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GuildRosterRepository<'a, C> {
    /// Creates a new GuildRosterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `GuildRosterRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the roster board for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(GuildRosterBoard))` - Board found for the guild
    /// - `Ok(None)` - The guild has not set up a roster yet
    /// - `Err(AppError)` - Database error or corrupted stored ID
    pub async fn get_by_guild_id(
        &self,
        guild_id: u64,
    ) -> Result<Option<GuildRosterBoard>, AppError> {
        let entity = entity::prelude::GuildRoster::find()
            .filter(entity::guild_roster::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(GuildRosterBoard::from_entity).transpose()
    }

    /// Creates or moves the roster board of a guild.
    ///
    /// Conflicts on `guild_id` update the channel, message and `updated_at` while keeping
    /// the original row ID and `created_at`.
    ///
    /// # Arguments
    /// - `param` - Guild, channel and message IDs of the roster message
    ///
    /// # Returns
    /// - `Ok(GuildRosterBoard)` - The created or updated board
    /// - `Err(AppError)` - Database error during upsert
    pub async fn upsert(
        &self,
        param: UpsertGuildRosterBoardParam,
    ) -> Result<GuildRosterBoard, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::GuildRoster::insert(entity::guild_roster::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            message_id: ActiveValue::Set(param.message_id.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::guild_roster::Column::GuildId)
                .update_columns([
                    entity::guild_roster::Column::ChannelId,
                    entity::guild_roster::Column::MessageId,
                    entity::guild_roster::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        GuildRosterBoard::from_entity(entity)
    }
}
