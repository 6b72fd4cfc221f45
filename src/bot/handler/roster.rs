//! Roster slash commands and the character management components.

use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, CommandInteraction, ComponentInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditMessage, MessageId,
};

use crate::{
    bot::{
        component::parse_character_value,
        handler::interaction::{ephemeral, selected_value, update, update_embed},
        view::roster::{
            build_class_select, build_remove_character_select, build_role_select,
            build_roster_components, build_roster_embed, build_set_main_select,
        },
    },
    error::AppError,
    model::{
        roster::{CharacterParam, RosterCharacter, UpsertGuildRosterBoardParam},
        wow::{WowClass, WowRole},
    },
    service::roster::RosterService,
};

const NO_ROSTER: &str = "No roster set up yet. Run `/roster setup` first.";

/// `/roster setup`: posts the roster message in this channel and makes it the live one.
pub async fn setup(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
    guild_id: u64,
) -> Result<(), AppError> {
    let service = RosterService::new(db);
    let snapshot = service.snapshot(guild_id).await?;

    let message = CreateInteractionResponseMessage::new()
        .embed(build_roster_embed(&snapshot))
        .components(build_roster_components());
    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    let reply = command.get_response(&ctx.http).await?;

    let board = service
        .upsert_board(UpsertGuildRosterBoardParam {
            guild_id,
            channel_id: command.channel_id.get(),
            message_id: reply.id.get(),
        })
        .await?;

    tracing::info!(
        "Roster for guild {} now lives in channel {} (message {})",
        guild_id,
        board.channel_id,
        board.message_id
    );

    Ok(())
}

/// `/roster show`: ephemeral copy of the roster.
pub async fn show(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
    guild_id: u64,
) -> Result<(), AppError> {
    let snapshot = RosterService::new(db).snapshot(guild_id).await?;

    let message = CreateInteractionResponseMessage::new()
        .embed(build_roster_embed(&snapshot))
        .components(build_roster_components())
        .ephemeral(true);
    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

/// `/roster refresh`: re-renders the live roster message, reporting what is missing.
pub async fn refresh(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
    guild_id: u64,
) -> Result<(), AppError> {
    let service = RosterService::new(db);

    let Some(board) = service.get_board(guild_id).await? else {
        command.create_response(&ctx.http, ephemeral(NO_ROSTER)).await?;
        return Ok(());
    };

    let channel_id = ChannelId::new(board.channel_id);
    let message_id = MessageId::new(board.message_id);

    if let Err(e) = ctx.http.get_channel(channel_id).await {
        tracing::warn!("Roster channel {} unavailable: {:?}", channel_id, e);
        command
            .create_response(&ctx.http, ephemeral("Could not find the roster channel."))
            .await?;
        return Ok(());
    }

    if let Err(e) = channel_id.message(&ctx.http, message_id).await {
        tracing::warn!("Roster message {} unavailable: {:?}", message_id, e);
        command
            .create_response(
                &ctx.http,
                ephemeral(
                    "Could not find the roster message — it may have been deleted. Run `/roster setup` again.",
                ),
            )
            .await?;
        return Ok(());
    }

    let snapshot = service.snapshot(guild_id).await?;
    channel_id
        .edit_message(
            &ctx.http,
            message_id,
            EditMessage::new()
                .embed(build_roster_embed(&snapshot))
                .components(build_roster_components()),
        )
        .await?;

    command
        .create_response(&ctx.http, ephemeral("✅ Roster message refreshed!"))
        .await?;

    Ok(())
}

/// "Add/Edit Character": ephemeral menu with the role picker and, when the user already
/// has characters, pickers to remove one or change their main.
pub async fn open_character_menu(
    db: &DatabaseConnection,
    ctx: &Context,
    component: &ComponentInteraction,
    guild_id: u64,
) -> Result<(), AppError> {
    let service = RosterService::new(db);

    if service.get_board(guild_id).await?.is_none() {
        component.create_response(&ctx.http, ephemeral(NO_ROSTER)).await?;
        return Ok(());
    }

    let characters = user_characters(&service, guild_id, component.user.id.get()).await?;

    let mut components = vec![build_role_select()];
    if !characters.is_empty() {
        components.push(build_remove_character_select(&characters));
    }
    if characters.len() > 1 {
        components.push(build_set_main_select(&characters));
    }

    let message = CreateInteractionResponseMessage::new()
        .content("Add a new character or manage your existing ones:")
        .components(components)
        .ephemeral(true);
    component
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

/// Role picked: swap the menu for the class picker of that role.
pub async fn select_role(ctx: &Context, component: &ComponentInteraction) -> Result<(), AppError> {
    let role: WowRole = selected_value(component)?.parse()?;

    component
        .create_response(
            &ctx.http,
            update(
                format!(
                    "You selected {} **{}**. Now select the **Class**:",
                    role.emoji(),
                    role
                ),
                vec![build_class_select(role)],
            ),
        )
        .await?;

    Ok(())
}

/// Class picked: add the character and offer a main picker once the user has several.
pub async fn select_class(
    db: &DatabaseConnection,
    ctx: &Context,
    component: &ComponentInteraction,
    guild_id: u64,
    role: WowRole,
) -> Result<(), AppError> {
    let wow_class: WowClass = selected_value(component)?.parse()?;
    let user_id = component.user.id.get();

    if !wow_class.can_fill(role) {
        component
            .create_response(
                &ctx.http,
                update(format!("{} cannot play {}.", wow_class, role), Vec::new()),
            )
            .await?;
        return Ok(());
    }

    let service = RosterService::new(db);
    let added = service
        .add_character(CharacterParam {
            guild_id,
            user_id,
            role,
            wow_class,
        })
        .await?;

    let characters = user_characters(&service, guild_id, user_id).await?;

    let response = if !added {
        update(
            format!(
                "{} **{} — {}** is already on your roster.",
                role.emoji(),
                role,
                wow_class
            ),
            Vec::new(),
        )
    } else if characters.len() > 1 {
        let current_main = characters
            .iter()
            .find(|c| c.is_main)
            .map(|c| format!("{} {}", c.role, c.wow_class))
            .unwrap_or_else(|| "not set".to_string());

        update(
            format!(
                "✅ Added {} **{} — {}**! Your current main is **{}**. Want to change it?",
                role.emoji(),
                role,
                wow_class,
                current_main
            ),
            vec![build_set_main_select(&characters)],
        )
    } else {
        update(
            format!(
                "✅ Added {} **{} — {}** to the roster! (Auto-set as your ★ Main)",
                role.emoji(),
                role,
                wow_class
            ),
            Vec::new(),
        )
    };

    component.create_response(&ctx.http, response).await?;

    if added {
        refresh_roster_message(db, ctx, guild_id).await;
    }

    Ok(())
}

/// Main picker: mark the selected character as the user's main.
pub async fn set_main(
    db: &DatabaseConnection,
    ctx: &Context,
    component: &ComponentInteraction,
    guild_id: u64,
) -> Result<(), AppError> {
    let (role, wow_class) = parse_character_value(selected_value(component)?)?;

    let changed = RosterService::new(db)
        .set_main_character(CharacterParam {
            guild_id,
            user_id: component.user.id.get(),
            role,
            wow_class,
        })
        .await?;

    let content = if changed {
        format!("★ **{} — {}** is now your Main character!", role, wow_class)
    } else {
        format!("**{} — {}** is no longer on your roster.", role, wow_class)
    };

    component
        .create_response(&ctx.http, update(content, Vec::new()))
        .await?;

    if changed {
        refresh_roster_message(db, ctx, guild_id).await;
    }

    Ok(())
}

/// Remove picker: delete the selected character.
pub async fn remove_character(
    db: &DatabaseConnection,
    ctx: &Context,
    component: &ComponentInteraction,
    guild_id: u64,
) -> Result<(), AppError> {
    let (role, wow_class) = parse_character_value(selected_value(component)?)?;

    RosterService::new(db)
        .remove_character(CharacterParam {
            guild_id,
            user_id: component.user.id.get(),
            role,
            wow_class,
        })
        .await?;

    component
        .create_response(
            &ctx.http,
            update(
                format!(
                    "Removed {} **{} — {}** from your roster.",
                    role.emoji(),
                    role,
                    wow_class
                ),
                Vec::new(),
            ),
        )
        .await?;

    refresh_roster_message(db, ctx, guild_id).await;

    Ok(())
}

/// "Remove Me Completely": drop the user from the roster and re-render in place.
pub async fn remove_me(
    db: &DatabaseConnection,
    ctx: &Context,
    component: &ComponentInteraction,
    guild_id: u64,
) -> Result<(), AppError> {
    let service = RosterService::new(db);

    let Some(board) = service.get_board(guild_id).await? else {
        component.create_response(&ctx.http, ephemeral(NO_ROSTER)).await?;
        return Ok(());
    };

    service
        .remove_member(guild_id, component.user.id.get())
        .await?;

    let snapshot = service.snapshot(guild_id).await?;
    component
        .create_response(
            &ctx.http,
            update_embed(build_roster_embed(&snapshot), build_roster_components()),
        )
        .await?;

    // Pressed on a `/roster show` copy, so the live message still needs the update
    if component.message.id.get() != board.message_id {
        refresh_roster_message(db, ctx, guild_id).await;
    }

    Ok(())
}

async fn user_characters(
    service: &RosterService<'_>,
    guild_id: u64,
    user_id: u64,
) -> Result<Vec<RosterCharacter>, AppError> {
    let mut snapshot = service.snapshot(guild_id).await?;

    Ok(snapshot.remove(&user_id).unwrap_or_default())
}

/// Re-renders the live roster message of a guild, if one is set up.
///
/// Failures are logged; the interaction that triggered the refresh has already succeeded.
pub async fn refresh_roster_message(db: &DatabaseConnection, ctx: &Context, guild_id: u64) {
    if let Err(e) = try_refresh_roster_message(db, ctx, guild_id).await {
        tracing::warn!(
            "Failed to refresh roster message for guild {}: {:?}",
            guild_id,
            e
        );
    }
}

async fn try_refresh_roster_message(
    db: &DatabaseConnection,
    ctx: &Context,
    guild_id: u64,
) -> Result<(), AppError> {
    let service = RosterService::new(db);

    let Some(board) = service.get_board(guild_id).await? else {
        return Ok(());
    };

    let snapshot = service.snapshot(guild_id).await?;

    ChannelId::new(board.channel_id)
        .edit_message(
            &ctx.http,
            MessageId::new(board.message_id),
            EditMessage::new()
                .embed(build_roster_embed(&snapshot))
                .components(build_roster_components()),
        )
        .await?;

    Ok(())
}
