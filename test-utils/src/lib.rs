//! Shared test setup for the roster bot.
//!
//! Repository and service tests run against a fresh in-memory SQLite database per test.
//! `TestBuilder` picks the tables (and the composite unique keys the migrations would
//! create), `TestContext` owns the resulting connection, and the `factory` module inserts
//! rows with defaults so a test only spells out the fields it is about.
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn removes_last_character() -> Result<(), AppError> {
//!     let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let member = factory::create_member(db, 1000, 42).await.unwrap();
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
