//! Roster member factory for creating test member entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a roster member for the given guild and user.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
/// - `user_id` - Discord user ID
///
/// # Returns
/// - `Ok(entity::roster_member::Model)` - Created member
/// - `Err(DbErr)` - Database error during insert (including duplicate guild/user)
pub async fn create_member(
    db: &DatabaseConnection,
    guild_id: u64,
    user_id: u64,
) -> Result<entity::roster_member::Model, DbErr> {
    entity::roster_member::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
