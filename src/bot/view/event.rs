//! Event message rendering.
//!
//! Layout of the event embed description:
//!
//! ```text
//! <optional description>
//!
//! 🔵 Warrior - @tank
//! 🟢 Priest - @healer
//! 🔴 Mage - @dps1
//! 🔴 —
//! 🔴 —
//!
//! 🪑 🔴 Rogue - @bench1, 🔵 @bench2
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateInputText, CreateModal,
    CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption, InputTextStyle,
};

use crate::{
    bot::{
        component::{
            ComponentAction, EVENT_CREATE_MODAL, EVENT_DATE_INPUT, EVENT_DESCRIPTION_INPUT,
            EVENT_TIME_INPUT,
        },
        view::{role_emoji, EMBED_COLOR},
    },
    model::{
        event::{EventSignup, EventWithSignups},
        roster::RosterSnapshot,
        wow::{WowClass, WowRole},
    },
};

pub const CANCELLED_COLOR: u32 = 0xFF0000;
/// Maximum characters in a message's content.
pub const MESSAGE_CONTENT_LIMIT: usize = 2000;
/// Maximum characters accepted for an event description.
pub const EVENT_DESCRIPTION_MAX_LENGTH: u16 = 1000;
pub const CANCELLED_NOTICE: &str = "❌ **This event has been cancelled.**";

/// Embed title, e.g. `📅 Saturday, March 14, 2026 at 20:00 Server Time`.
pub fn format_event_title(scheduled_at: DateTime<Utc>) -> String {
    format!(
        "📅 {} at {} Server Time",
        scheduled_at.format("%A, %B %-d, %Y"),
        scheduled_at.format("%H:%M")
    )
}

/// Class a user plays for a role: their main if it has that role, else their first
/// character of that role.
pub fn class_for(snapshot: &RosterSnapshot, user_id: u64, role: WowRole) -> Option<WowClass> {
    let characters = snapshot.get(&user_id)?;

    characters
        .iter()
        .find(|c| c.role == role && c.is_main)
        .or_else(|| characters.iter().find(|c| c.role == role))
        .map(|c| c.wow_class)
}

fn format_signup(snapshot: &RosterSnapshot, signup: &EventSignup) -> String {
    let dot = signup.role.emoji();

    match class_for(snapshot, signup.user_id, signup.role) {
        Some(class) => format!("{} {} - <@{}>", dot, class, signup.user_id),
        None => format!("{} <@{}>", dot, signup.user_id),
    }
}

/// Slot lines for every role followed by the bench line, if anyone is benched.
pub fn format_event_lines(event: &EventWithSignups, snapshot: &RosterSnapshot) -> Vec<String> {
    let mut lines = Vec::new();

    for role in WowRole::ALL {
        let mut holders = event.main_slots(role);

        for _ in 0..role.slot_limit() {
            match holders.next() {
                Some(signup) => lines.push(format_signup(snapshot, signup)),
                None => lines.push(format!("{} —", role.emoji())),
            }
        }
    }

    let bench: Vec<String> = event
        .bench()
        .map(|signup| format_signup(snapshot, signup))
        .collect();

    if !bench.is_empty() {
        lines.push(String::new());
        lines.push(format!("🪑 {}", bench.join(", ")));
    }

    lines
}

/// Full embed description: the event description, a blank line, then the slot lines.
pub fn format_event_description(event: &EventWithSignups, snapshot: &RosterSnapshot) -> String {
    let lines = format_event_lines(event, snapshot).join("\n");

    match event.event.description.as_deref() {
        Some(description) if !description.trim().is_empty() => {
            format!("{}\n\n{}", description, lines)
        }
        _ => lines,
    }
}

pub fn build_event_embed(event: &EventWithSignups, snapshot: &RosterSnapshot) -> CreateEmbed {
    CreateEmbed::new()
        .title(format_event_title(event.event.scheduled_at))
        .description(format_event_description(event, snapshot))
        .color(EMBED_COLOR)
}

/// Replacement embed once an event is cancelled. Keeps the original title when known.
pub fn build_cancelled_embed(title: Option<&str>) -> CreateEmbed {
    CreateEmbed::new()
        .title(title.unwrap_or("Event"))
        .description(CANCELLED_NOTICE)
        .color(CANCELLED_COLOR)
}

pub fn build_event_components() -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(ComponentAction::EventSignup.custom_id())
            .label("Sign Up")
            .style(ButtonStyle::Success),
        CreateButton::new(ComponentAction::EventRemove.custom_id())
            .label("Remove Me")
            .style(ButtonStyle::Secondary),
        CreateButton::new(ComponentAction::EventCancel.custom_id())
            .label("Cancel Event")
            .style(ButtonStyle::Danger),
    ])]
}

/// Role picker for signing up to an event; the event id travels in the custom id.
pub fn build_event_role_select(event_id: i32, roles: &[WowRole]) -> CreateActionRow {
    let options = roles
        .iter()
        .map(|role| {
            CreateSelectMenuOption::new(role.name(), role.name()).emoji(role_emoji(*role))
        })
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            ComponentAction::EventRoleSelect(event_id).custom_id(),
            CreateSelectMenuKind::String { options },
        )
        .placeholder("Select your role for this event...")
        .min_values(1)
        .max_values(1),
    )
}

/// Modal asking for the date, server time and description of a new event.
pub fn build_create_event_modal(today: NaiveDate) -> CreateModal {
    let date = CreateInputText::new(InputTextStyle::Short, "Date (YYYY-MM-DD)", EVENT_DATE_INPUT)
        .value(today.format("%Y-%m-%d").to_string())
        .required(true);

    let time = CreateInputText::new(InputTextStyle::Short, "Server Time (HH:MM)", EVENT_TIME_INPUT)
        .placeholder("20:00")
        .required(true);

    let description = CreateInputText::new(
        InputTextStyle::Paragraph,
        "Description (optional)",
        EVENT_DESCRIPTION_INPUT,
    )
    .required(false)
    .max_length(EVENT_DESCRIPTION_MAX_LENGTH);

    CreateModal::new(EVENT_CREATE_MODAL, "Create Event").components(vec![
        CreateActionRow::InputText(date),
        CreateActionRow::InputText(time),
        CreateActionRow::InputText(description),
    ])
}

/// Distinct roles of a user's roster characters, in role order.
pub fn roster_roles(snapshot: &RosterSnapshot, user_id: u64) -> Vec<WowRole> {
    let Some(characters) = snapshot.get(&user_id) else {
        return Vec::new();
    };

    WowRole::ALL
        .into_iter()
        .filter(|role| characters.iter().any(|c| c.role == *role))
        .collect()
}

/// Mentions of every roster member, split into messages that fit Discord's content limit.
///
/// Empty for an empty roster.
pub fn roster_pings(snapshot: &RosterSnapshot) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for user_id in snapshot.keys() {
        let mention = format!("<@{}>", user_id);

        if !current.is_empty() && current.len() + 1 + mention.len() > MESSAGE_CONTENT_LIMIT {
            chunks.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&mention);
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
