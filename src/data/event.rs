//! Event data repository for database operations.
//!
//! This module provides the `EventRepository` for creating, looking up and deleting
//! scheduled events. Events are bound to the Discord message that displays them, so
//! button interactions resolve the event through its message ID.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QuerySelect,
};

use crate::{
    error::AppError,
    model::event::{CreateEventParam, Event},
};

/// Repository providing database operations for events.
pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new EventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `EventRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new event.
    ///
    /// # Arguments
    /// - `param` - Event fields including the Discord message it is bound to
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event
    /// - `Err(AppError)` - Database error, including a duplicate message ID
    pub async fn create(&self, param: CreateEventParam) -> Result<Event, AppError> {
        let entity = entity::event::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            message_id: ActiveValue::Set(param.message_id.to_string()),
            creator_id: ActiveValue::Set(param.creator_id.to_string()),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            scheduled_at: ActiveValue::Set(param.scheduled_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Event::from_entity(entity)
    }

    /// Gets an event by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - Event found
    /// - `Ok(None)` - No event with this ID (e.g. cancelled)
    /// - `Err(AppError)` - Database error or corrupted stored ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Event>, AppError> {
        let entity = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        entity.map(Event::from_entity).transpose()
    }

    /// Gets an event by ID and locks its row until the transaction ends.
    ///
    /// Signup changes lock the event first, so slot counting and bench promotion for one
    /// event never interleave.
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - Event found; the row is locked
    /// - `Ok(None)` - No event with this ID
    /// - `Err(AppError)` - Database error or corrupted stored ID
    pub async fn lock_by_id(&self, id: i32) -> Result<Option<Event>, AppError> {
        let entity = entity::prelude::Event::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await?;

        entity.map(Event::from_entity).transpose()
    }

    /// Gets the event bound to a Discord message.
    ///
    /// # Arguments
    /// - `message_id` - Discord message ID displaying the event
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - Event found
    /// - `Ok(None)` - The message does not belong to a live event
    /// - `Err(AppError)` - Database error or corrupted stored ID
    pub async fn get_by_message_id(&self, message_id: u64) -> Result<Option<Event>, AppError> {
        let entity = entity::prelude::Event::find()
            .filter(entity::event::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(Event::from_entity).transpose()
    }

    /// Deletes an event by ID.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows (0 when already absent)
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::Event::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
