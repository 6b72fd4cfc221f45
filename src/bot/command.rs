//! Slash command definitions and registration.

use serenity::all::{
    Command, CommandOptionType, Context, CreateCommand, CreateCommandOption, GuildId,
};

use crate::error::AppError;

pub const ROSTER_COMMAND: &str = "roster";
pub const EVENT_COMMAND: &str = "event";

/// A decoded `/<command> <subcommand>` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    RosterSetup,
    RosterShow,
    RosterRefresh,
    EventCreate,
}

impl SlashCommand {
    /// Matches a command and subcommand name. Returns `None` for anything this bot does
    /// not define, e.g. commands left over from an older registration.
    pub fn parse(command: &str, subcommand: Option<&str>) -> Option<Self> {
        match (command, subcommand?) {
            (ROSTER_COMMAND, "setup") => Some(SlashCommand::RosterSetup),
            (ROSTER_COMMAND, "show") => Some(SlashCommand::RosterShow),
            (ROSTER_COMMAND, "refresh") => Some(SlashCommand::RosterRefresh),
            (EVENT_COMMAND, "create") => Some(SlashCommand::EventCreate),
            _ => None,
        }
    }
}

fn subcommand(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
}

pub fn commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(ROSTER_COMMAND)
            .description("Guild M+ roster")
            .add_option(subcommand(
                "setup",
                "Create or move the single roster message to this channel",
            ))
            .add_option(subcommand("show", "Show the roster privately"))
            .add_option(subcommand(
                "refresh",
                "Re-render the live roster message with the latest layout",
            )),
        CreateCommand::new(EVENT_COMMAND)
            .description("M+ event signups")
            .add_option(subcommand("create", "Create a new event signup")),
    ]
}

/// Registers the slash commands.
///
/// Guild commands update instantly, so a development guild is preferred when configured;
/// otherwise the commands are registered globally.
///
/// # Arguments
/// - `ctx` - Serenity context of the connected bot
/// - `dev_guild_id` - Guild to register to instead of registering globally
///
/// # Returns
/// - `Ok(())` - Commands registered
/// - `Err(AppError::DiscordErr)` - Discord rejected the registration
pub async fn register(ctx: &Context, dev_guild_id: Option<u64>) -> Result<(), AppError> {
    match dev_guild_id {
        Some(guild_id) => {
            let registered = GuildId::new(guild_id)
                .set_commands(&ctx.http, commands())
                .await?;

            tracing::info!(
                "Registered {} slash commands to guild {}",
                registered.len(),
                guild_id
            );
        }
        None => {
            let registered = Command::set_global_commands(&ctx.http, commands()).await?;

            tracing::info!("Registered {} global slash commands", registered.len());
        }
    }

    Ok(())
}
