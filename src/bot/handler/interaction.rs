//! Routing of interactions to the roster and event handlers.
//!
//! Handlers return `Result<(), AppError>`. Expected outcomes such as a missing roster or an
//! unknown event are answered directly by the handler; an `Err` means something broke and
//! is logged here before the user gets a generic ephemeral failure message.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, ComponentInteraction, ComponentInteractionDataKind, Context,
    CreateActionRow, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, Interaction,
};

use crate::{
    bot::{
        command::SlashCommand,
        component::{ComponentAction, EVENT_CREATE_MODAL},
        handler::{event, roster},
    },
    error::{internal::InternalError, AppError},
};

pub const FAILURE_MESSAGE: &str = "❌ Something went wrong handling that interaction.";
pub const GUILD_ONLY: &str = "This command can only be used in a server.";

/// New ephemeral text reply.
pub(super) fn ephemeral(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

/// Replaces the text and components of the message the component is attached to.
pub(super) fn update(
    content: impl Into<String>,
    components: Vec<CreateActionRow>,
) -> CreateInteractionResponse {
    CreateInteractionResponse::UpdateMessage(
        CreateInteractionResponseMessage::new()
            .content(content)
            .components(components),
    )
}

/// Replaces the embed and components of the message the component is attached to.
pub(super) fn update_embed(
    embed: CreateEmbed,
    components: Vec<CreateActionRow>,
) -> CreateInteractionResponse {
    CreateInteractionResponse::UpdateMessage(
        CreateInteractionResponseMessage::new()
            .embed(embed)
            .components(components),
    )
}

/// First selected value of a string select menu.
pub(super) fn selected_value(component: &ComponentInteraction) -> Result<&str, InternalError> {
    let missing = || InternalError::MissingSelection(component.data.custom_id.clone());

    match &component.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => {
            values.first().map(String::as_str).ok_or_else(missing)
        }
        _ => Err(missing()),
    }
}

pub async fn handle_interaction(db: &DatabaseConnection, ctx: &Context, interaction: Interaction) {
    let result = match &interaction {
        Interaction::Command(command) => handle_command(db, ctx, command).await,
        Interaction::Component(component) => handle_component(db, ctx, component).await,
        Interaction::Modal(modal) if modal.data.custom_id == EVENT_CREATE_MODAL => {
            event::submit_create_modal(db, ctx, modal).await
        }
        Interaction::Modal(modal) => {
            tracing::warn!("Unknown modal '{}'", modal.data.custom_id);
            Ok(())
        }
        _ => Ok(()),
    };

    if let Err(e) = result {
        tracing::error!("Failed to handle interaction {}: {:?}", interaction.id(), e);
        reply_failure(ctx, &interaction).await;
    }
}

async fn handle_command(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let subcommand = command.data.options.first().map(|option| option.name.as_str());

    let Some(slash_command) = SlashCommand::parse(&command.data.name, subcommand) else {
        tracing::warn!(
            "Unknown slash command '{}' ({:?})",
            command.data.name,
            subcommand
        );
        return Ok(());
    };

    let Some(guild_id) = command.guild_id else {
        command.create_response(&ctx.http, ephemeral(GUILD_ONLY)).await?;
        return Ok(());
    };
    let guild_id = guild_id.get();

    match slash_command {
        SlashCommand::RosterSetup => roster::setup(db, ctx, command, guild_id).await,
        SlashCommand::RosterShow => roster::show(db, ctx, command, guild_id).await,
        SlashCommand::RosterRefresh => roster::refresh(db, ctx, command, guild_id).await,
        SlashCommand::EventCreate => event::open_create_modal(ctx, command).await,
    }
}

async fn handle_component(
    db: &DatabaseConnection,
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let action = ComponentAction::parse(&component.data.custom_id)?;

    // Roster and event messages only exist in guilds
    let Some(guild_id) = component.guild_id else {
        return Ok(());
    };
    let guild_id = guild_id.get();

    match action {
        ComponentAction::RosterAddCharacter => {
            roster::open_character_menu(db, ctx, component, guild_id).await
        }
        ComponentAction::RosterRemoveMe => roster::remove_me(db, ctx, component, guild_id).await,
        ComponentAction::RosterRoleSelect => roster::select_role(ctx, component).await,
        ComponentAction::RosterClassSelect(role) => {
            roster::select_class(db, ctx, component, guild_id, role).await
        }
        ComponentAction::RosterRemoveCharacterSelect => {
            roster::remove_character(db, ctx, component, guild_id).await
        }
        ComponentAction::RosterSetMainSelect => {
            roster::set_main(db, ctx, component, guild_id).await
        }
        ComponentAction::EventSignup => event::sign_up(db, ctx, component).await,
        ComponentAction::EventRemove => event::remove_me(db, ctx, component).await,
        ComponentAction::EventCancel => event::cancel(db, ctx, component).await,
        ComponentAction::EventRoleSelect(event_id) => {
            event::select_role(db, ctx, component, event_id).await
        }
    }
}

/// Tells the user the interaction failed.
///
/// Tries an initial response first and falls back to a follow-up when the handler had
/// already responded or deferred before failing.
async fn reply_failure(ctx: &Context, interaction: &Interaction) {
    let response = ephemeral(FAILURE_MESSAGE);

    if ctx
        .http
        .create_interaction_response(interaction.id(), interaction.token(), &response, Vec::new())
        .await
        .is_ok()
    {
        return;
    }

    let followup = CreateInteractionResponseFollowup::new()
        .content(FAILURE_MESSAGE)
        .ephemeral(true);

    if let Err(e) = ctx
        .http
        .create_followup_message(interaction.token(), &followup, Vec::new())
        .await
    {
        tracing::warn!("Failed to report interaction failure: {:?}", e);
    }
}
