//! Guild roster factory for creating test roster board entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a roster board for the guild with generated channel and message IDs.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
///
/// # Returns
/// - `Ok(entity::guild_roster::Model)` - Created roster board
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild_roster(
    db: &DatabaseConnection,
    guild_id: u64,
) -> Result<entity::guild_roster::Model, DbErr> {
    let now = Utc::now();
    entity::guild_roster::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id.to_string()),
        channel_id: ActiveValue::Set(next_id().to_string()),
        message_id: ActiveValue::Set(next_id().to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
