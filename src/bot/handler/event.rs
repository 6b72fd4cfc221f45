//! Event creation modal and the signup buttons under event messages.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{
    ActionRowComponent, ChannelId, CommandInteraction, ComponentInteraction, Context,
    CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, EditInteractionResponse, EditMessage, MessageId,
    ModalInteraction,
};

use crate::{
    bot::{
        component::{EVENT_DATE_INPUT, EVENT_DESCRIPTION_INPUT, EVENT_TIME_INPUT},
        handler::interaction::{ephemeral, selected_value, update, update_embed, GUILD_ONLY},
        view::event::{
            build_cancelled_embed, build_create_event_modal, build_event_components,
            build_event_embed, build_event_role_select, roster_pings, roster_roles,
        },
    },
    error::AppError,
    model::{event::CreateEventParam, wow::WowRole},
    service::{event::EventService, roster::RosterService},
    util::parse::parse_scheduled_at,
};

const EVENT_NOT_FOUND: &str = "Could not find this event.";

fn signed_up_message(role: WowRole) -> String {
    format!("Signed up as {} **{}**!", role.emoji(), role)
}

/// `/event create`: opens the event modal with today's date filled in.
pub async fn open_create_modal(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let modal = build_create_event_modal(Utc::now().date_naive());

    command
        .create_response(&ctx.http, CreateInteractionResponse::Modal(modal))
        .await?;

    Ok(())
}

fn input_value(modal: &ModalInteraction, custom_id: &str) -> Option<String> {
    modal
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == custom_id => {
                input.value.clone()
            }
            _ => None,
        })
}

/// Event modal submitted: create the event bound to the reply message and ping the roster.
pub async fn submit_create_modal(
    db: &DatabaseConnection,
    ctx: &Context,
    modal: &ModalInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = modal.guild_id else {
        modal.create_response(&ctx.http, ephemeral(GUILD_ONLY)).await?;
        return Ok(());
    };
    let guild_id = guild_id.get();

    let date = input_value(modal, EVENT_DATE_INPUT).unwrap_or_default();
    let time = input_value(modal, EVENT_TIME_INPUT).unwrap_or_default();
    let description = input_value(modal, EVENT_DESCRIPTION_INPUT)
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());

    let Some(scheduled_at) = parse_scheduled_at(&date, &time) else {
        modal
            .create_response(
                &ctx.http,
                ephemeral("Invalid date/time. Use `YYYY-MM-DD` for date and `HH:MM` for time."),
            )
            .await?;
        return Ok(());
    };

    // The event is keyed by its message, so the reply has to exist before the event row
    modal.defer(&ctx.http).await?;
    let reply = modal.get_response(&ctx.http).await?;

    let event = EventService::new(db)
        .create_event(CreateEventParam {
            guild_id,
            channel_id: modal.channel_id.get(),
            message_id: reply.id.get(),
            creator_id: modal.user.id.get(),
            title: date.trim().to_string(),
            description,
            scheduled_at,
        })
        .await?;

    let snapshot = RosterService::new(db).snapshot(guild_id).await?;

    modal
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new()
                .embed(build_event_embed(&event, &snapshot))
                .components(build_event_components()),
        )
        .await?;

    // Mentions only notify on new messages, so the pings go out as follow-ups that are
    // removed again right away
    for pings in roster_pings(&snapshot) {
        match modal
            .create_followup(&ctx.http, CreateInteractionResponseFollowup::new().content(pings))
            .await
        {
            Ok(message) => {
                if let Err(e) = modal.delete_followup(&ctx.http, message.id).await {
                    tracing::warn!("Failed to delete roster ping message: {:?}", e);
                }
            }
            Err(e) => {
                tracing::warn!("Failed to ping roster for event {}: {:?}", event.event.id, e);
            }
        }
    }

    Ok(())
}

/// "Sign Up": signs users with a single roster role straight away, otherwise asks for a
/// role.
pub async fn sign_up(
    db: &DatabaseConnection,
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let service = EventService::new(db);
    let user_id = component.user.id.get();

    let Some(event) = service
        .get_event_by_message_id(component.message.id.get())
        .await?
    else {
        component.create_response(&ctx.http, ephemeral(EVENT_NOT_FOUND)).await?;
        return Ok(());
    };

    if event.signup_for(user_id).is_some() {
        component
            .create_response(
                &ctx.http,
                ephemeral(
                    "You are already signed up for this event. Remove yourself first to change your role.",
                ),
            )
            .await?;
        return Ok(());
    }

    let snapshot = RosterService::new(db).snapshot(event.event.guild_id).await?;
    let roles = roster_roles(&snapshot, user_id);

    if let [role] = roles.as_slice() {
        service.signup(event.event.id, user_id, *role).await?;

        component
            .create_response(&ctx.http, ephemeral(signed_up_message(*role)))
            .await?;

        refresh_event_message(db, ctx, event.event.id).await;
        return Ok(());
    }

    let roles = if roles.is_empty() {
        WowRole::ALL.to_vec()
    } else {
        roles
    };

    let message = CreateInteractionResponseMessage::new()
        .content("Select your role for this event:")
        .components(vec![build_event_role_select(event.event.id, &roles)])
        .ephemeral(true);
    component
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

/// Event role picker: sign up for the event carried in the custom id.
pub async fn select_role(
    db: &DatabaseConnection,
    ctx: &Context,
    component: &ComponentInteraction,
    event_id: i32,
) -> Result<(), AppError> {
    let role: WowRole = selected_value(component)?.parse()?;

    match EventService::new(db)
        .signup(event_id, component.user.id.get(), role)
        .await
    {
        Ok(_) => {}
        // Cancelled while the picker was open
        Err(AppError::NotFound(_)) => {
            component
                .create_response(&ctx.http, update(EVENT_NOT_FOUND, Vec::new()))
                .await?;
            return Ok(());
        }
        Err(e) => return Err(e),
    }

    component
        .create_response(&ctx.http, update(signed_up_message(role), Vec::new()))
        .await?;

    refresh_event_message(db, ctx, event_id).await;

    Ok(())
}

/// "Remove Me": drop the user's signup, promoting from the bench when a slot frees up.
pub async fn remove_me(
    db: &DatabaseConnection,
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let service = EventService::new(db);
    let user_id = component.user.id.get();

    let Some(event) = service
        .get_event_by_message_id(component.message.id.get())
        .await?
    else {
        component.create_response(&ctx.http, ephemeral(EVENT_NOT_FOUND)).await?;
        return Ok(());
    };

    if event.signup_for(user_id).is_none() {
        component
            .create_response(&ctx.http, ephemeral("You are not signed up for this event."))
            .await?;
        return Ok(());
    }

    service.remove_signup(event.event.id, user_id).await?;

    component
        .create_response(&ctx.http, ephemeral("You have been removed from this event."))
        .await?;

    refresh_event_message(db, ctx, event.event.id).await;

    Ok(())
}

/// "Cancel Event": creator only; deletes the event and greys out its message.
pub async fn cancel(
    db: &DatabaseConnection,
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), AppError> {
    let service = EventService::new(db);

    let Some(event) = service
        .get_event_by_message_id(component.message.id.get())
        .await?
    else {
        component.create_response(&ctx.http, ephemeral(EVENT_NOT_FOUND)).await?;
        return Ok(());
    };

    if event.event.creator_id != component.user.id.get() {
        component
            .create_response(
                &ctx.http,
                ephemeral("❌ Only the event creator can cancel this event."),
            )
            .await?;
        return Ok(());
    }

    service.cancel_event(event.event.id).await?;

    let title = component
        .message
        .embeds
        .first()
        .and_then(|embed| embed.title.as_deref());

    component
        .create_response(
            &ctx.http,
            update_embed(build_cancelled_embed(title), Vec::new()),
        )
        .await?;

    Ok(())
}

/// Re-renders an event message with the latest signups and roster classes.
///
/// Failures are logged; the interaction that triggered the refresh has already succeeded.
pub async fn refresh_event_message(db: &DatabaseConnection, ctx: &Context, event_id: i32) {
    if let Err(e) = try_refresh_event_message(db, ctx, event_id).await {
        tracing::warn!("Failed to refresh message of event {}: {:?}", event_id, e);
    }
}

async fn try_refresh_event_message(
    db: &DatabaseConnection,
    ctx: &Context,
    event_id: i32,
) -> Result<(), AppError> {
    let Some(event) = EventService::new(db).get_event_by_id(event_id).await? else {
        return Ok(());
    };

    let snapshot = RosterService::new(db).snapshot(event.event.guild_id).await?;

    ChannelId::new(event.event.channel_id)
        .edit_message(
            &ctx.http,
            MessageId::new(event.event.message_id),
            EditMessage::new().embed(build_event_embed(&event, &snapshot)),
        )
        .await?;

    Ok(())
}
