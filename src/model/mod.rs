//! Domain models for roster and event operations.
//!
//! Repositories convert SeaORM entity models into these types at the data boundary so
//! that services and the bot layer never touch entity models directly. Discord
//! snowflakes are stored as strings and surfaced here as `u64`.

pub mod event;
pub mod roster;
pub mod wow;
