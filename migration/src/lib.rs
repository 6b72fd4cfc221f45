pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_guild_roster_table;
mod m20260301_000002_create_roster_member_table;
mod m20260301_000003_create_roster_character_table;
mod m20260305_000004_create_event_table;
mod m20260305_000005_create_event_signup_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_guild_roster_table::Migration),
            Box::new(m20260301_000002_create_roster_member_table::Migration),
            Box::new(m20260301_000003_create_roster_character_table::Migration),
            Box::new(m20260305_000004_create_event_table::Migration),
            Box::new(m20260305_000005_create_event_signup_table::Migration),
        ]
    }
}
