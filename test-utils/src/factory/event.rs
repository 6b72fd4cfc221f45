//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let event = EventFactory::new(&db, guild_id)
///     .creator_id(42)
///     .description(Some("Weekly keys".to_string()))
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    channel_id: u64,
    message_id: u64,
    creator_id: u64,
    title: String,
    description: Option<String>,
    scheduled_at: DateTime<Utc>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - channel_id, message_id, creator_id: unique generated IDs
    /// - title: `"Event {id}"`
    /// - description: `None`
    /// - scheduled_at: 1 day from now
    pub fn new(db: &'a DatabaseConnection, guild_id: u64) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id,
            channel_id: next_id(),
            message_id: next_id(),
            creator_id: next_id(),
            title: format!("Event {}", id),
            description: None,
            scheduled_at: Utc::now() + chrono::Duration::days(1),
        }
    }

    /// Sets the Discord message ID the event is bound to.
    pub fn message_id(mut self, message_id: u64) -> Self {
        self.message_id = message_id;
        self
    }

    /// Sets the Discord ID of the event creator.
    pub fn creator_id(mut self, creator_id: u64) -> Self {
        self.creator_id = creator_id;
        self
    }

    /// Sets the event title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the event description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the scheduled time.
    pub fn scheduled_at(mut self, scheduled_at: DateTime<Utc>) -> Self {
        self.scheduled_at = scheduled_at;
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            channel_id: ActiveValue::Set(self.channel_id.to_string()),
            message_id: ActiveValue::Set(self.message_id.to_string()),
            creator_id: ActiveValue::Set(self.creator_id.to_string()),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            scheduled_at: ActiveValue::Set(self.scheduled_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values in the given guild.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
///
/// # Returns
/// - `Ok(entity::event::Model)` - Created event
/// - `Err(DbErr)` - Database error during insert
pub async fn create_event(
    db: &DatabaseConnection,
    guild_id: u64,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, guild_id).build().await
}
