//! Event signup data repository.
//!
//! Signups are ordered by `signed_up_at` and then ID everywhere. That order is the bench
//! queue: the earliest bench signup of a role is the next one promoted.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::{event::EventSignup, wow::WowRole},
};

pub struct EventSignupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventSignupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all signups of an event in signup order.
    pub async fn get_by_event_id(&self, event_id: i32) -> Result<Vec<EventSignup>, AppError> {
        let entities = entity::prelude::EventSignup::find()
            .filter(entity::event_signup::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_signup::Column::SignedUpAt)
            .order_by_asc(entity::event_signup::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(EventSignup::from_entity).collect()
    }

    /// Finds a user's signup for an event.
    pub async fn find(&self, event_id: i32, user_id: u64) -> Result<Option<EventSignup>, AppError> {
        let entity = entity::prelude::EventSignup::find()
            .filter(entity::event_signup::Column::EventId.eq(event_id))
            .filter(entity::event_signup::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(EventSignup::from_entity).transpose()
    }

    /// Counts main-slot signups for a role, ignoring the given user's own signup.
    ///
    /// # Arguments
    /// - `event_id` - Event ID
    /// - `role` - Role whose occupied slots are counted
    /// - `excluded_user_id` - User whose signup is left out of the count
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of occupied main slots
    /// - `Err(AppError)` - Database error during query
    pub async fn count_main_slots(
        &self,
        event_id: i32,
        role: WowRole,
        excluded_user_id: u64,
    ) -> Result<u64, AppError> {
        let count = entity::prelude::EventSignup::find()
            .filter(entity::event_signup::Column::EventId.eq(event_id))
            .filter(entity::event_signup::Column::Role.eq(role.name()))
            .filter(entity::event_signup::Column::IsBench.eq(false))
            .filter(entity::event_signup::Column::UserId.ne(excluded_user_id.to_string()))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Creates or replaces a user's signup for an event.
    ///
    /// Conflicts on `(event_id, user_id)` overwrite role, bench status and `signed_up_at`,
    /// so a user never holds more than one signup per event.
    ///
    /// # Arguments
    /// - `event_id` - Event ID
    /// - `user_id` - Discord user ID
    /// - `role` - Claimed role
    /// - `is_bench` - Whether the signup goes to the bench
    ///
    /// # Returns
    /// - `Ok(EventSignup)` - The created or replaced signup
    /// - `Err(AppError)` - Database error during upsert
    pub async fn upsert(
        &self,
        event_id: i32,
        user_id: u64,
        role: WowRole,
        is_bench: bool,
    ) -> Result<EventSignup, AppError> {
        let entity = entity::prelude::EventSignup::insert(entity::event_signup::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id.to_string()),
            role: ActiveValue::Set(role.name().to_string()),
            is_bench: ActiveValue::Set(is_bench),
            signed_up_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::event_signup::Column::EventId,
                entity::event_signup::Column::UserId,
            ])
            .update_columns([
                entity::event_signup::Column::Role,
                entity::event_signup::Column::IsBench,
                entity::event_signup::Column::SignedUpAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        EventSignup::from_entity(entity)
    }

    /// Gets the longest-waiting bench signup for a role.
    pub async fn earliest_bench(
        &self,
        event_id: i32,
        role: WowRole,
    ) -> Result<Option<EventSignup>, AppError> {
        let entity = entity::prelude::EventSignup::find()
            .filter(entity::event_signup::Column::EventId.eq(event_id))
            .filter(entity::event_signup::Column::Role.eq(role.name()))
            .filter(entity::event_signup::Column::IsBench.eq(true))
            .order_by_asc(entity::event_signup::Column::SignedUpAt)
            .order_by_asc(entity::event_signup::Column::Id)
            .one(self.db)
            .await?;

        entity.map(EventSignup::from_entity).transpose()
    }

    /// Moves a bench signup into a main slot.
    ///
    /// Keeps `signed_up_at` so the signup's position among main slots is unchanged.
    pub async fn promote(&self, signup_id: i32) -> Result<EventSignup, AppError> {
        let entity = entity::event_signup::ActiveModel {
            id: ActiveValue::Unchanged(signup_id),
            is_bench: ActiveValue::Set(false),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        EventSignup::from_entity(entity)
    }

    /// Deletes a signup by ID.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows (0 when already absent)
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, signup_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::EventSignup::delete_by_id(signup_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every signup of an event.
    pub async fn delete_by_event_id(&self, event_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::EventSignup::delete_many()
            .filter(entity::event_signup::Column::EventId.eq(event_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
