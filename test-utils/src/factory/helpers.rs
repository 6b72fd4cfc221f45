//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a roster member together with the given `(role, class, is_main)` characters.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
/// - `user_id` - Discord user ID
/// - `characters` - Characters to insert, in order
///
/// # Returns
/// - `Ok((member, characters))` - The member and the created characters
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_with_characters(
    db: &DatabaseConnection,
    guild_id: u64,
    user_id: u64,
    characters: &[(&str, &str, bool)],
) -> Result<
    (
        entity::roster_member::Model,
        Vec<entity::roster_character::Model>,
    ),
    DbErr,
> {
    let member = crate::factory::roster_member::create_member(db, guild_id, user_id).await?;

    let mut created = Vec::with_capacity(characters.len());
    for (role, wow_class, is_main) in characters {
        let character =
            crate::factory::roster_character::RosterCharacterFactory::new(db, member.id)
                .role(*role)
                .wow_class(*wow_class)
                .main(*is_main)
                .build()
                .await?;
        created.push(character);
    }

    Ok((member, created))
}

/// Creates an event and signs up the given `(user_id, role, is_bench)` entries in order.
///
/// Signup timestamps are spaced one second apart so bench ordering follows the slice
/// order.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
/// - `signups` - Signups to insert, in order
///
/// # Returns
/// - `Ok((event, signups))` - The event and the created signups
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_signups(
    db: &DatabaseConnection,
    guild_id: u64,
    signups: &[(u64, &str, bool)],
) -> Result<
    (
        entity::event::Model,
        Vec<entity::event_signup::Model>,
    ),
    DbErr,
> {
    let event = crate::factory::event::create_event(db, guild_id).await?;
    let start = chrono::Utc::now() - chrono::Duration::hours(1);

    let mut created = Vec::with_capacity(signups.len());
    for (offset, (user_id, role, is_bench)) in signups.iter().enumerate() {
        let signup = crate::factory::event_signup::EventSignupFactory::new(db, event.id, *user_id)
            .role(*role)
            .bench(*is_bench)
            .signed_up_at(start + chrono::Duration::seconds(offset as i64))
            .build()
            .await?;
        created.push(signup);
    }

    Ok((event, created))
}
