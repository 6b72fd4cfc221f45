//! Roster character data repository.
//!
//! Provides the duplicate-tolerant insert used when members add characters, and the
//! queries that keep the single-main bookkeeping consistent. Characters are always listed
//! by class name and then ID, which is the order used to pick a replacement main.

use std::collections::BTreeSet;

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TryInsertResult,
};

use crate::{
    error::AppError,
    model::{
        roster::RosterCharacter,
        wow::{WowClass, WowRole},
    },
};

pub struct RosterCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RosterCharacterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a character unless the member already has the same role and class.
    ///
    /// Uses `ON CONFLICT (member_id, role, wow_class) DO NOTHING` so that racing inserts of
    /// the same pairing never surface a unique violation.
    ///
    /// # Arguments
    /// - `member_id` - Owning roster member ID
    /// - `role` - Character role
    /// - `wow_class` - Character class
    /// - `is_main` - Whether the new character is the member's main
    ///
    /// # Returns
    /// - `Ok(true)` - The character was inserted
    /// - `Ok(false)` - The pairing already existed, nothing changed
    /// - `Err(AppError)` - Database error during insert
    pub async fn insert_or_ignore(
        &self,
        member_id: i32,
        role: WowRole,
        wow_class: WowClass,
        is_main: bool,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::RosterCharacter::insert(
            entity::roster_character::ActiveModel {
                member_id: ActiveValue::Set(member_id),
                role: ActiveValue::Set(role.name().to_string()),
                wow_class: ActiveValue::Set(wow_class.name().to_string()),
                is_main: ActiveValue::Set(is_main),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            },
        )
        .on_conflict(
            OnConflict::columns([
                entity::roster_character::Column::MemberId,
                entity::roster_character::Column::Role,
                entity::roster_character::Column::WowClass,
            ])
            .do_nothing()
            .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        Ok(matches!(result, TryInsertResult::Inserted(_)))
    }

    /// Finds a member's character by role and class.
    pub async fn find(
        &self,
        member_id: i32,
        role: WowRole,
        wow_class: WowClass,
    ) -> Result<Option<RosterCharacter>, AppError> {
        let entity = entity::prelude::RosterCharacter::find()
            .filter(entity::roster_character::Column::MemberId.eq(member_id))
            .filter(entity::roster_character::Column::Role.eq(role.name()))
            .filter(entity::roster_character::Column::WowClass.eq(wow_class.name()))
            .one(self.db)
            .await?;

        entity.map(RosterCharacter::from_entity).transpose()
    }

    /// Gets a member's characters ordered by class name, then ID.
    pub async fn get_by_member_id(&self, member_id: i32) -> Result<Vec<RosterCharacter>, AppError> {
        let entities = entity::prelude::RosterCharacter::find()
            .filter(entity::roster_character::Column::MemberId.eq(member_id))
            .order_by_asc(entity::roster_character::Column::WowClass)
            .order_by_asc(entity::roster_character::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(RosterCharacter::from_entity).collect()
    }

    /// Gets the characters of several members ordered by class name, then ID.
    pub async fn get_by_member_ids(
        &self,
        member_ids: &[i32],
    ) -> Result<Vec<RosterCharacter>, AppError> {
        if member_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::RosterCharacter::find()
            .filter(entity::roster_character::Column::MemberId.is_in(member_ids.iter().copied()))
            .order_by_asc(entity::roster_character::Column::WowClass)
            .order_by_asc(entity::roster_character::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(RosterCharacter::from_entity).collect()
    }

    /// Counts a member's characters.
    pub async fn count_by_member_id(&self, member_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::RosterCharacter::find()
            .filter(entity::roster_character::Column::MemberId.eq(member_id))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Clears the main flag on every character of a member.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated
    /// - `Err(AppError)` - Database error during update
    pub async fn clear_main(&self, member_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::RosterCharacter::update_many()
            .col_expr(
                entity::roster_character::Column::IsMain,
                Expr::value(false),
            )
            .filter(entity::roster_character::Column::MemberId.eq(member_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks a single character as main.
    ///
    /// Does not touch the member's other characters; callers clear them first when needed.
    pub async fn set_main(&self, character_id: i32) -> Result<RosterCharacter, AppError> {
        let entity = entity::roster_character::ActiveModel {
            id: ActiveValue::Unchanged(character_id),
            is_main: ActiveValue::Set(true),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        RosterCharacter::from_entity(entity)
    }

    /// Deletes a character by ID.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows (0 when already absent)
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, character_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::RosterCharacter::delete_by_id(character_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every character of a member.
    pub async fn delete_by_member_id(&self, member_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::RosterCharacter::delete_many()
            .filter(entity::roster_character::Column::MemberId.eq(member_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the IDs of members that have characters but none marked as main.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Member IDs in ascending order
    /// - `Err(AppError)` - Database error during query
    pub async fn get_member_ids_without_main(&self) -> Result<Vec<i32>, AppError> {
        let characters = entity::prelude::RosterCharacter::find()
            .order_by_asc(entity::roster_character::Column::MemberId)
            .all(self.db)
            .await?;

        let with_main: BTreeSet<i32> = characters
            .iter()
            .filter(|c| c.is_main)
            .map(|c| c.member_id)
            .collect();

        let without_main: BTreeSet<i32> = characters
            .iter()
            .map(|c| c.member_id)
            .filter(|id| !with_main.contains(id))
            .collect();

        Ok(without_main.into_iter().collect())
    }
}
