use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    ColumnTrait, EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{RosterMember, RosterCharacter};
///
/// let test = TestBuilder::new()
///     .with_table(RosterMember)
///     .with_table(RosterCharacter)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entity models, executed in insertion order.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after every table exists.
    ///
    /// Entity-derived schemas only carry single-column uniqueness, so composite unique
    /// keys that the migrations define have to be added here for conflict handling to
    /// behave the same way in tests.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after their referenced
    /// tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a composite unique index over the given columns of an entity table.
    ///
    /// # Arguments
    /// - `name` - Index name
    /// - `entity` - Entity whose table receives the index
    /// - `columns` - Columns covered by the index, in order
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_unique_index<E, C, I>(mut self, name: &str, entity: E, columns: I) -> Self
    where
        E: EntityTrait,
        C: ColumnTrait,
        I: IntoIterator<Item = C>,
    {
        let mut index = Index::create();
        index.name(name).table(entity).unique();
        for column in columns {
            index.col(column);
        }
        self.indexes.push(index.to_owned());
        self
    }

    /// Adds all tables required for roster operations.
    ///
    /// Adds `GuildRoster`, `RosterMember` and `RosterCharacter` together with the
    /// `(guild_id, user_id)` and `(member_id, role, wow_class)` unique keys.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_roster_tables(self) -> Self {
        self.with_table(GuildRoster)
            .with_table(RosterMember)
            .with_table(RosterCharacter)
            .with_unique_index(
                "idx_roster_member_guild_user",
                RosterMember,
                [
                    entity::roster_member::Column::GuildId,
                    entity::roster_member::Column::UserId,
                ],
            )
            .with_unique_index(
                "idx_roster_character_unique",
                RosterCharacter,
                [
                    entity::roster_character::Column::MemberId,
                    entity::roster_character::Column::Role,
                    entity::roster_character::Column::WowClass,
                ],
            )
    }

    /// Adds all tables required for event operations.
    ///
    /// Adds `Event` and `EventSignup` together with the `(event_id, user_id)` unique key.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_event_tables(self) -> Self {
        self.with_table(Event)
            .with_table(EventSignup)
            .with_unique_index(
                "idx_event_signup_unique",
                EventSignup,
                [
                    entity::event_signup::Column::EventId,
                    entity::event_signup::Column::UserId,
                ],
            )
    }

    /// Adds every table of the application schema.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_roster_tables().with_event_tables()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements followed by all CREATE INDEX statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
