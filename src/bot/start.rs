use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client without connecting it.
///
/// Only the `GUILDS` intent is requested: commands, buttons, select menus and modals all
/// arrive as interactions, which need no privileged intents.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `db` - Database connection handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to `start()`
/// - `Err(AppError::DiscordErr)` - The client could not be built
pub async fn init_bot(config: &Config, db: DatabaseConnection) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(db, config.dev_guild_id);

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}
