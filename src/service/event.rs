//! Event service: event lifecycle and signup slot allocation.
//!
//! Each role has a fixed number of main slots per event (`WowRole::slot_limit`). Signups
//! beyond the limit go to the bench, and whenever a main slot of a role is vacated the
//! earliest bench signup of that role is promoted.
//!
//! Signup changes lock the event row before counting slots, so concurrent signups for one
//! event are allocated one at a time.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{event::EventRepository, event_signup::EventSignupRepository},
    error::AppError,
    model::{
        event::{CreateEventParam, Event, EventSignup, EventWithSignups},
        wow::WowRole,
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event bound to the message that displays it.
    pub async fn create_event(&self, param: CreateEventParam) -> Result<EventWithSignups, AppError> {
        let event = EventRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Created event {} in guild {} scheduled at {}",
            event.id,
            event.guild_id,
            event.scheduled_at
        );

        Ok(EventWithSignups {
            event,
            signups: Vec::new(),
        })
    }

    /// Gets the event displayed by a Discord message, with its signups.
    pub async fn get_event_by_message_id(
        &self,
        message_id: u64,
    ) -> Result<Option<EventWithSignups>, AppError> {
        let event = EventRepository::new(self.db)
            .get_by_message_id(message_id)
            .await?;

        self.with_signups(event).await
    }

    /// Gets an event by ID, with its signups.
    pub async fn get_event_by_id(&self, id: i32) -> Result<Option<EventWithSignups>, AppError> {
        let event = EventRepository::new(self.db).get_by_id(id).await?;

        self.with_signups(event).await
    }

    /// Deletes an event and all of its signups.
    ///
    /// # Returns
    /// - `Ok(true)` - The event was deleted
    /// - `Ok(false)` - The event no longer existed
    /// - `Err(AppError)` - Database error; nothing was deleted
    pub async fn cancel_event(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        EventSignupRepository::new(&txn).delete_by_event_id(id).await?;
        let deleted = EventRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        if deleted > 0 {
            tracing::info!("Cancelled event {}", id);
        }

        Ok(deleted > 0)
    }

    /// Signs a user up for an event in the given role.
    ///
    /// The signup takes a main slot when fewer than the role's limit are occupied by other
    /// users, otherwise it goes to the bench. An existing signup is replaced in place:
    /// - same role: returned unchanged, keeping its slot and queue position
    /// - different role: role and bench status are recomputed, and if the user left a main
    ///   slot the earliest bench signup of the old role is promoted
    ///
    /// # Arguments
    /// - `event_id` - Event ID
    /// - `user_id` - Discord user ID
    /// - `role` - Claimed role
    ///
    /// # Returns
    /// - `Ok(EventSignup)` - The user's signup after the operation
    /// - `Err(AppError::NotFound)` - The event does not exist
    /// - `Err(AppError)` - Database error; nothing was written
    pub async fn signup(
        &self,
        event_id: i32,
        user_id: u64,
        role: WowRole,
    ) -> Result<EventSignup, AppError> {
        let txn = self.db.begin().await?;

        if EventRepository::new(&txn).lock_by_id(event_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Event {} not found", event_id)));
        }

        let signup_repo = EventSignupRepository::new(&txn);
        let previous = signup_repo.find(event_id, user_id).await?;

        if let Some(previous) = &previous {
            if previous.role == role {
                return Ok(previous.clone());
            }
        }

        let occupied = signup_repo.count_main_slots(event_id, role, user_id).await?;
        let is_bench = occupied >= role.slot_limit();

        let signup = signup_repo.upsert(event_id, user_id, role, is_bench).await?;

        if let Some(previous) = previous.filter(|p| !p.is_bench) {
            Self::promote_next(&signup_repo, event_id, previous.role).await?;
        }

        txn.commit().await?;

        tracing::debug!(
            "User {} signed up for event {} as {} (bench: {})",
            user_id,
            event_id,
            role,
            signup.is_bench
        );

        Ok(signup)
    }

    /// Removes a user's signup from an event.
    ///
    /// When the removed signup held a main slot, the earliest bench signup of the same role
    /// is promoted. Absent signups are a no-op.
    ///
    /// # Returns
    /// - `Ok(Some(EventSignup))` - The signup that was promoted into the freed slot
    /// - `Ok(None)` - Nothing was promoted
    /// - `Err(AppError)` - Database error; nothing was written
    pub async fn remove_signup(
        &self,
        event_id: i32,
        user_id: u64,
    ) -> Result<Option<EventSignup>, AppError> {
        let txn = self.db.begin().await?;

        if EventRepository::new(&txn).lock_by_id(event_id).await?.is_none() {
            return Ok(None);
        }

        let signup_repo = EventSignupRepository::new(&txn);
        let Some(signup) = signup_repo.find(event_id, user_id).await? else {
            return Ok(None);
        };

        signup_repo.delete(signup.id).await?;

        let promoted = if signup.is_bench {
            None
        } else {
            Self::promote_next(&signup_repo, event_id, signup.role).await?
        };

        txn.commit().await?;

        Ok(promoted)
    }

    async fn promote_next<C: sea_orm::ConnectionTrait>(
        signup_repo: &EventSignupRepository<'_, C>,
        event_id: i32,
        role: WowRole,
    ) -> Result<Option<EventSignup>, AppError> {
        let Some(next) = signup_repo.earliest_bench(event_id, role).await? else {
            return Ok(None);
        };

        let promoted = signup_repo.promote(next.id).await?;

        tracing::info!(
            "Promoted user {} from bench to {} on event {}",
            promoted.user_id,
            role,
            event_id
        );

        Ok(Some(promoted))
    }

    async fn with_signups(&self, event: Option<Event>) -> Result<Option<EventWithSignups>, AppError> {
        let Some(event) = event else {
            return Ok(None);
        };

        let signups = EventSignupRepository::new(self.db)
            .get_by_event_id(event.id)
            .await?;

        Ok(Some(EventWithSignups { event, signups }))
    }
}
