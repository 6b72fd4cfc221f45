//! SeaORM entity models for the roster and event tables.

pub mod prelude;

pub mod event;
pub mod event_signup;
pub mod guild_roster;
pub mod roster_character;
pub mod roster_member;
