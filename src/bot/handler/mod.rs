//! Gateway event handling.
//!
//! `ready` registers the slash commands; everything else arrives through
//! `interaction_create` and is routed by the `interaction` module to the roster and event
//! handlers.

pub mod event;
pub mod interaction;
pub mod ready;
pub mod roster;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

/// Discord bot event handler
pub struct Handler {
    db: DatabaseConnection,
    dev_guild_id: Option<u64>,
}

impl Handler {
    pub fn new(db: DatabaseConnection, dev_guild_id: Option<u64>) -> Self {
        Self { db, dev_guild_id }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&ctx, &ready, self.dev_guild_id).await;
    }

    /// Called for every slash command, component and modal submission
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.db, &ctx, interaction).await;
    }
}
