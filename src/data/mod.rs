//! Database repository layer for roster and event entities.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `crate::model`. Each repository borrows any `ConnectionTrait` implementor, so the same
//! queries run against the pooled connection or inside a transaction opened by a service.

pub mod event;
pub mod event_signup;
pub mod guild_roster;
pub mod roster_character;
pub mod roster_member;
