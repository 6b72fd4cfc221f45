//! Domain models for scheduled events and their signups.

use chrono::{DateTime, Utc};

use crate::{error::AppError, model::wow::WowRole, util::parse::parse_u64_from_string};

/// A scheduled Mythic+ session bound to one Discord message.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub creator_id: u64,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Converts an entity model to an event domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Event)` - The converted event
    /// - `Err(AppError::InternalErr)` - A stored snowflake failed to parse
    pub fn from_entity(entity: entity::event::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            message_id: parse_u64_from_string(entity.message_id)?,
            creator_id: parse_u64_from_string(entity.creator_id)?,
            title: entity.title,
            description: entity.description,
            scheduled_at: entity.scheduled_at,
            created_at: entity.created_at,
        })
    }
}

/// A user's claim on one role of an event, either in a main slot or on the bench.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSignup {
    pub id: i32,
    pub event_id: i32,
    pub user_id: u64,
    pub role: WowRole,
    pub is_bench: bool,
    pub signed_up_at: DateTime<Utc>,
}

impl EventSignup {
    pub fn from_entity(entity: entity::event_signup::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            event_id: entity.event_id,
            user_id: parse_u64_from_string(entity.user_id)?,
            role: entity.role.parse()?,
            is_bench: entity.is_bench,
            signed_up_at: entity.signed_up_at,
        })
    }
}

/// An event together with its signups in signup order.
#[derive(Debug, Clone, PartialEq)]
pub struct EventWithSignups {
    pub event: Event,
    pub signups: Vec<EventSignup>,
}

impl EventWithSignups {
    /// Finds the signup held by a user, if any.
    pub fn signup_for(&self, user_id: u64) -> Option<&EventSignup> {
        self.signups.iter().find(|s| s.user_id == user_id)
    }

    /// Main-slot signups for a role in signup order.
    pub fn main_slots(&self, role: WowRole) -> impl Iterator<Item = &EventSignup> {
        self.signups
            .iter()
            .filter(move |s| s.role == role && !s.is_bench)
    }

    /// Bench signups across all roles in signup order.
    pub fn bench(&self) -> impl Iterator<Item = &EventSignup> {
        self.signups.iter().filter(|s| s.is_bench)
    }
}

/// Parameters for creating an event.
#[derive(Debug, Clone)]
pub struct CreateEventParam {
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub creator_id: u64,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: DateTime<Utc>,
}
