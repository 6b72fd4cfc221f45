//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the foreign keys they need as arguments,
//! and `helpers` builds common multi-entity setups.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let member = factory::create_member(&db, 1, 42).await?;
//!     let character = factory::create_character(&db, member.id, "Tank", "Warrior").await?;
//!
//!     let event = factory::create_event(&db, 1).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let character = factory::roster_character::RosterCharacterFactory::new(&db, member.id)
//!     .role("Healer")
//!     .wow_class("Priest")
//!     .main(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `guild_roster` - Create guild roster board entities
//! - `roster_member` - Create roster member entities
//! - `roster_character` - Create roster character entities
//! - `event` - Create event entities
//! - `event_signup` - Create event signup entities
//! - `helpers` - ID generation and multi-entity setups

pub mod event;
pub mod event_signup;
pub mod guild_roster;
pub mod helpers;
pub mod roster_character;
pub mod roster_member;

// Re-export commonly used factory functions for concise usage
pub use event::create_event;
pub use event_signup::create_signup;
pub use guild_roster::create_guild_roster;
pub use roster_character::create_character;
pub use roster_member::create_member;
