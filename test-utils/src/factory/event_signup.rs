//! Event signup factory for creating test signup entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test event signups with customizable fields.
///
/// Defaults to a non-bench DPS signup timestamped now.
pub struct EventSignupFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    user_id: u64,
    role: String,
    is_bench: bool,
    signed_up_at: DateTime<Utc>,
}

impl<'a> EventSignupFactory<'a> {
    /// Creates a new factory with default values.
    pub fn new(db: &'a DatabaseConnection, event_id: i32, user_id: u64) -> Self {
        Self {
            db,
            event_id,
            user_id,
            role: "DPS".to_string(),
            is_bench: false,
            signed_up_at: Utc::now(),
        }
    }

    /// Sets the signup role.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets whether the signup sits on the bench.
    pub fn bench(mut self, is_bench: bool) -> Self {
        self.is_bench = is_bench;
        self
    }

    /// Sets the signup timestamp used for bench ordering.
    pub fn signed_up_at(mut self, signed_up_at: DateTime<Utc>) -> Self {
        self.signed_up_at = signed_up_at;
        self
    }

    /// Builds and inserts the signup entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event_signup::Model)` - Created signup
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event_signup::Model, DbErr> {
        entity::event_signup::ActiveModel {
            id: ActiveValue::NotSet,
            event_id: ActiveValue::Set(self.event_id),
            user_id: ActiveValue::Set(self.user_id.to_string()),
            role: ActiveValue::Set(self.role),
            is_bench: ActiveValue::Set(self.is_bench),
            signed_up_at: ActiveValue::Set(self.signed_up_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-bench signup with the given role.
///
/// # Arguments
/// - `db` - Database connection
/// - `event_id` - Event ID
/// - `user_id` - Discord user ID
/// - `role` - Role display name
///
/// # Returns
/// - `Ok(entity::event_signup::Model)` - Created signup
/// - `Err(DbErr)` - Database error during insert
pub async fn create_signup(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: u64,
    role: &str,
) -> Result<entity::event_signup::Model, DbErr> {
    EventSignupFactory::new(db, event_id, user_id)
        .role(role)
        .build()
        .await
}
