//! Guild roster service.
//!
//! Maintains the invariant that a member with at least one character has exactly one
//! main: the first character added becomes main, removing the main promotes the
//! alphabetically-first remaining class, and removing the last character removes the
//! member.
//!
//! Writes lock the member row first, so concurrent edits of one member are applied one at
//! a time.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        guild_roster::GuildRosterRepository, roster_character::RosterCharacterRepository,
        roster_member::RosterMemberRepository,
    },
    error::AppError,
    model::roster::{CharacterParam, GuildRosterBoard, RosterSnapshot, UpsertGuildRosterBoardParam},
};

pub struct RosterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RosterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or moves the live roster message of a guild.
    pub async fn upsert_board(
        &self,
        param: UpsertGuildRosterBoardParam,
    ) -> Result<GuildRosterBoard, AppError> {
        GuildRosterRepository::new(self.db).upsert(param).await
    }

    /// Gets the live roster message of a guild, if one was set up.
    pub async fn get_board(&self, guild_id: u64) -> Result<Option<GuildRosterBoard>, AppError> {
        GuildRosterRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await
    }

    /// Adds a character to a member, creating the member on first use.
    ///
    /// The member's first character becomes their main. Adding a role and class the member
    /// already has is a no-op.
    ///
    /// # Arguments
    /// - `param` - Guild, user, role and class of the character
    ///
    /// # Returns
    /// - `Ok(true)` - The character was added
    /// - `Ok(false)` - The member already had this character
    /// - `Err(AppError)` - Database error; nothing was written
    pub async fn add_character(&self, param: CharacterParam) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let member = RosterMemberRepository::new(&txn)
            .find_or_create(param.guild_id, param.user_id)
            .await?;

        let character_repo = RosterCharacterRepository::new(&txn);
        let existing = character_repo.count_by_member_id(member.id).await?;

        let inserted = character_repo
            .insert_or_ignore(member.id, param.role, param.wow_class, existing == 0)
            .await?;

        txn.commit().await?;

        if inserted {
            tracing::debug!(
                "Added {} {} for user {} in guild {}",
                param.role,
                param.wow_class,
                param.user_id,
                param.guild_id
            );
        }

        Ok(inserted)
    }

    /// Makes one of a member's characters their main.
    ///
    /// When the member or the character does not exist nothing is changed, so the
    /// current main stays in place.
    ///
    /// # Returns
    /// - `Ok(true)` - The character is now the member's only main
    /// - `Ok(false)` - No matching member or character
    /// - `Err(AppError)` - Database error; nothing was written
    pub async fn set_main_character(&self, param: CharacterParam) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let Some(member) = RosterMemberRepository::new(&txn)
            .lock(param.guild_id, param.user_id)
            .await?
        else {
            return Ok(false);
        };

        let character_repo = RosterCharacterRepository::new(&txn);
        let Some(character) = character_repo
            .find(member.id, param.role, param.wow_class)
            .await?
        else {
            tracing::debug!(
                "User {} has no {} {} to set as main",
                param.user_id,
                param.role,
                param.wow_class
            );
            return Ok(false);
        };

        character_repo.clear_main(member.id).await?;
        character_repo.set_main(character.id).await?;

        txn.commit().await?;

        Ok(true)
    }

    /// Removes one character from a member.
    ///
    /// Removing the last character deletes the member. Removing the main promotes the
    /// remaining character whose class sorts first. Absent members or characters are a
    /// no-op.
    pub async fn remove_character(&self, param: CharacterParam) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let member_repo = RosterMemberRepository::new(&txn);
        let Some(member) = member_repo.lock(param.guild_id, param.user_id).await? else {
            return Ok(());
        };

        let character_repo = RosterCharacterRepository::new(&txn);
        let Some(character) = character_repo
            .find(member.id, param.role, param.wow_class)
            .await?
        else {
            return Ok(());
        };

        character_repo.delete(character.id).await?;

        let remaining = character_repo.get_by_member_id(member.id).await?;

        if remaining.is_empty() {
            member_repo.delete(member.id).await?;
        } else if character.is_main {
            if let Some(next) = remaining.first() {
                character_repo.set_main(next.id).await?;

                tracing::info!(
                    "Promoted {} {} to main for user {} in guild {}",
                    next.role,
                    next.wow_class,
                    param.user_id,
                    param.guild_id
                );
            }
        }

        txn.commit().await?;

        Ok(())
    }

    /// Removes a member and all of their characters. Absent members are a no-op.
    pub async fn remove_member(&self, guild_id: u64, user_id: u64) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let member_repo = RosterMemberRepository::new(&txn);
        let Some(member) = member_repo.lock(guild_id, user_id).await? else {
            return Ok(());
        };

        RosterCharacterRepository::new(&txn)
            .delete_by_member_id(member.id)
            .await?;
        member_repo.delete(member.id).await?;

        txn.commit().await?;

        tracing::debug!("Removed user {} from roster of guild {}", user_id, guild_id);

        Ok(())
    }

    /// Gets every member of a guild with their characters.
    ///
    /// Characters are sorted by role (Tank, Healer, DPS) and then by class.
    pub async fn snapshot(&self, guild_id: u64) -> Result<RosterSnapshot, AppError> {
        let members = RosterMemberRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?;

        let member_ids: Vec<i32> = members.iter().map(|m| m.id).collect();
        let characters = RosterCharacterRepository::new(self.db)
            .get_by_member_ids(&member_ids)
            .await?;

        let mut snapshot = RosterSnapshot::new();
        for member in &members {
            let mut owned: Vec<_> = characters
                .iter()
                .filter(|c| c.member_id == member.id)
                .cloned()
                .collect();

            if owned.is_empty() {
                continue;
            }

            owned.sort_by(|a, b| a.role.cmp(&b.role).then(a.wow_class.cmp(&b.wow_class)));
            snapshot.insert(member.user_id, owned);
        }

        Ok(snapshot)
    }

    /// Repairs members that have characters but no main.
    ///
    /// Promotes each such member's alphabetically-first character. Safe to run repeatedly;
    /// members that already have a main are left untouched.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of members repaired
    /// - `Err(AppError)` - Database error; nothing was written
    pub async fn backfill_mains(&self) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        let character_repo = RosterCharacterRepository::new(&txn);
        let member_ids = character_repo.get_member_ids_without_main().await?;

        let mut repaired = 0;
        for member_id in member_ids {
            let characters = character_repo.get_by_member_id(member_id).await?;
            if let Some(first) = characters.first() {
                character_repo.set_main(first.id).await?;
                repaired += 1;
            }
        }

        txn.commit().await?;

        if repaired > 0 {
            tracing::info!("Backfilled main character for {} roster members", repaired);
        }

        Ok(repaired)
    }
}
