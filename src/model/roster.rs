//! Domain models for the guild roster.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    model::wow::{WowClass, WowRole},
    util::parse::parse_u64_from_string,
};

/// The single live roster message of a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRosterBoard {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GuildRosterBoard {
    /// Converts an entity model to a roster board domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(GuildRosterBoard)` - The converted board
    /// - `Err(AppError::InternalErr)` - A stored snowflake failed to parse
    pub fn from_entity(entity: entity::guild_roster::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            message_id: parse_u64_from_string(entity.message_id)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for creating or moving the roster message of a guild.
#[derive(Debug, Clone)]
pub struct UpsertGuildRosterBoardParam {
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
}

/// A roster member: one per (guild, user).
#[derive(Debug, Clone, PartialEq)]
pub struct RosterMember {
    pub id: i32,
    pub guild_id: u64,
    pub user_id: u64,
    pub created_at: DateTime<Utc>,
}

impl RosterMember {
    pub fn from_entity(entity: entity::roster_member::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            user_id: parse_u64_from_string(entity.user_id)?,
            created_at: entity.created_at,
        })
    }
}

/// One (role, class) pairing registered by a member.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterCharacter {
    pub id: i32,
    pub member_id: i32,
    pub role: WowRole,
    pub wow_class: WowClass,
    pub is_main: bool,
    pub created_at: DateTime<Utc>,
}

impl RosterCharacter {
    /// Converts an entity model to a character domain model.
    ///
    /// # Returns
    /// - `Ok(RosterCharacter)` - The converted character
    /// - `Err(AppError::InternalErr)` - Stored role or class is not a known name
    pub fn from_entity(entity: entity::roster_character::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            member_id: entity.member_id,
            role: entity.role.parse()?,
            wow_class: entity.wow_class.parse()?,
            is_main: entity.is_main,
            created_at: entity.created_at,
        })
    }
}

/// Identifies a member's character by guild, user, role and class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterParam {
    pub guild_id: u64,
    pub user_id: u64,
    pub role: WowRole,
    pub wow_class: WowClass,
}

/// All characters of a guild keyed by Discord user ID.
///
/// Each member's characters are sorted by role (Tank, Healer, DPS) and then by class.
pub type RosterSnapshot = BTreeMap<u64, Vec<RosterCharacter>>;
