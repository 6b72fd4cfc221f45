//! Roster character factory for creating test character entities.
//!
//! Defaults to a non-main DPS Mage. Role and class are stored as their display names.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test roster characters with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let character = RosterCharacterFactory::new(&db, member.id)
///     .role("Tank")
///     .wow_class("Warrior")
///     .main(true)
///     .build()
///     .await?;
/// ```
pub struct RosterCharacterFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    role: String,
    wow_class: String,
    is_main: bool,
}

impl<'a> RosterCharacterFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - role: `"DPS"`
    /// - wow_class: `"Mage"`
    /// - is_main: `false`
    pub fn new(db: &'a DatabaseConnection, member_id: i32) -> Self {
        Self {
            db,
            member_id,
            role: "DPS".to_string(),
            wow_class: "Mage".to_string(),
            is_main: false,
        }
    }

    /// Sets the character role.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the character class.
    pub fn wow_class(mut self, wow_class: impl Into<String>) -> Self {
        self.wow_class = wow_class.into();
        self
    }

    /// Sets whether the character is the member's main.
    pub fn main(mut self, is_main: bool) -> Self {
        self.is_main = is_main;
        self
    }

    /// Builds and inserts the character entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::roster_character::Model)` - Created character
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::roster_character::Model, DbErr> {
        entity::roster_character::ActiveModel {
            id: ActiveValue::NotSet,
            member_id: ActiveValue::Set(self.member_id),
            role: ActiveValue::Set(self.role),
            wow_class: ActiveValue::Set(self.wow_class),
            is_main: ActiveValue::Set(self.is_main),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-main character with the given role and class.
///
/// # Arguments
/// - `db` - Database connection
/// - `member_id` - Owning roster member ID
/// - `role` - Role display name
/// - `wow_class` - Class display name
///
/// # Returns
/// - `Ok(entity::roster_character::Model)` - Created character
/// - `Err(DbErr)` - Database error during insert
pub async fn create_character(
    db: &DatabaseConnection,
    member_id: i32,
    role: &str,
    wow_class: &str,
) -> Result<entity::roster_character::Model, DbErr> {
    RosterCharacterFactory::new(db, member_id)
        .role(role)
        .wow_class(wow_class)
        .build()
        .await
}
