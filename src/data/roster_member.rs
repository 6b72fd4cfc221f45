//! Roster member data repository.
//!
//! Members are created implicitly on a user's first character and removed once they have
//! no characters left.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{error::AppError, model::roster::RosterMember};

pub struct RosterMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RosterMemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the member row for a user and locks it until the transaction ends.
    ///
    /// SQLite has no row locks; there the write transaction locks the whole database.
    ///
    /// # Returns
    /// - `Ok(Some(RosterMember))` - The user is on the guild roster; the row is locked
    /// - `Ok(None)` - The user has no characters in this guild
    /// - `Err(AppError)` - Database error or corrupted stored ID
    pub async fn lock(&self, guild_id: u64, user_id: u64) -> Result<Option<RosterMember>, AppError> {
        let entity = entity::prelude::RosterMember::find()
            .filter(entity::roster_member::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::roster_member::Column::UserId.eq(user_id.to_string()))
            .lock_exclusive()
            .one(self.db)
            .await?;

        entity.map(RosterMember::from_entity).transpose()
    }

    /// Returns the locked member row for a user, creating it when absent.
    ///
    /// Inserts with `ON CONFLICT (guild_id, user_id) DO NOTHING`, then reads the row back
    /// with [`Self::lock`].
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(RosterMember)` - Existing or newly created member, locked
    /// - `Err(AppError)` - Database error during insert or lookup
    pub async fn find_or_create(&self, guild_id: u64, user_id: u64) -> Result<RosterMember, AppError> {
        entity::prelude::RosterMember::insert(entity::roster_member::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::roster_member::Column::GuildId,
                entity::roster_member::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        self.lock(guild_id, user_id).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "Roster member for user {} in guild {} vanished after insert",
                user_id, guild_id
            ))
        })
    }

    /// Gets all members of a guild ordered by creation.
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<RosterMember>, AppError> {
        let entities = entity::prelude::RosterMember::find()
            .filter(entity::roster_member::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::roster_member::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(RosterMember::from_entity).collect()
    }

    /// Deletes a member row by ID.
    ///
    /// Characters are removed by the foreign key cascade.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows (0 when already absent)
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, member_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::RosterMember::delete_by_id(member_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
