//! Roster message rendering.
//!
//! The roster embed groups characters by role. Every member appears once per character,
//! and the main character is marked with a star.

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateSelectMenu,
    CreateSelectMenuKind, CreateSelectMenuOption,
};

use crate::{
    bot::{
        component::{character_value, ComponentAction},
        view::{fit_field_value, role_emoji, EMBED_COLOR},
    },
    model::{
        roster::{RosterCharacter, RosterSnapshot},
        wow::WowRole,
    },
};

pub const EMPTY_ROSTER: &str = "_No one on the roster yet._";

/// Lines of one role section, `<@user> — Class` with ` ★` for mains.
///
/// Returns a single `—` line when nobody plays the role.
pub fn role_section_lines(snapshot: &RosterSnapshot, role: WowRole) -> Vec<String> {
    let lines: Vec<String> = snapshot
        .iter()
        .flat_map(|(user_id, characters)| {
            characters
                .iter()
                .filter(move |c| c.role == role)
                .map(move |c| {
                    let star = if c.is_main { " ★" } else { "" };
                    format!("<@{}> — {}{}", user_id, c.wow_class, star)
                })
        })
        .collect();

    if lines.is_empty() {
        vec!["—".to_string()]
    } else {
        lines
    }
}

/// Builds the roster embed from a guild snapshot.
pub fn build_roster_embed(snapshot: &RosterSnapshot) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("Mythic+ Roster")
        .color(EMBED_COLOR);

    if snapshot.is_empty() {
        return embed.description(EMPTY_ROSTER);
    }

    WowRole::ALL.into_iter().fold(embed, |embed, role| {
        let lines = role_section_lines(snapshot, role);
        embed.field(
            format!("{} {}", role.emoji(), role),
            fit_field_value(&lines),
            false,
        )
    })
}

/// Buttons under the live roster message.
pub fn build_roster_components() -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(ComponentAction::RosterAddCharacter.custom_id())
            .label("Add/Edit Character")
            .style(ButtonStyle::Primary),
        CreateButton::new(ComponentAction::RosterRemoveMe.custom_id())
            .label("Remove Me Completely")
            .style(ButtonStyle::Danger),
    ])]
}

/// Select menu offering the three roles for a new character.
pub fn build_role_select() -> CreateActionRow {
    let options = WowRole::ALL
        .into_iter()
        .map(|role| CreateSelectMenuOption::new(role.name(), role.name()).emoji(role_emoji(role)))
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            ComponentAction::RosterRoleSelect.custom_id(),
            CreateSelectMenuKind::String { options },
        )
        .placeholder("Select a Role to add...")
        .min_values(1)
        .max_values(1),
    )
}

/// Select menu offering the classes able to fill `role`.
///
/// The role travels in the custom id so the class handler knows which pairing to add.
pub fn build_class_select(role: WowRole) -> CreateActionRow {
    let options = role
        .classes()
        .iter()
        .map(|class| CreateSelectMenuOption::new(class.name(), class.name()))
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            ComponentAction::RosterClassSelect(role).custom_id(),
            CreateSelectMenuKind::String { options },
        )
        .placeholder(format!("Select a Class for {}...", role))
        .min_values(1)
        .max_values(1),
    )
}

/// Select option label for one of the user's characters.
pub fn character_label(character: &RosterCharacter, main_marker: &str) -> String {
    let marker = if character.is_main { main_marker } else { "" };
    format!("{} {}{}", character.role, character.wow_class, marker)
}

fn build_character_select(
    action: ComponentAction,
    placeholder: &str,
    characters: &[RosterCharacter],
    main_marker: &str,
) -> CreateActionRow {
    let options = characters
        .iter()
        .map(|c| {
            CreateSelectMenuOption::new(
                character_label(c, main_marker),
                character_value(c.role, c.wow_class),
            )
            .emoji(role_emoji(c.role))
        })
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(action.custom_id(), CreateSelectMenuKind::String { options })
            .placeholder(placeholder)
            .min_values(1)
            .max_values(1),
    )
}

/// Select menu for removing one of the user's characters.
pub fn build_remove_character_select(characters: &[RosterCharacter]) -> CreateActionRow {
    build_character_select(
        ComponentAction::RosterRemoveCharacterSelect,
        "Remove an existing character...",
        characters,
        " ★",
    )
}

/// Select menu for choosing the user's main character.
pub fn build_set_main_select(characters: &[RosterCharacter]) -> CreateActionRow {
    build_character_select(
        ComponentAction::RosterSetMainSelect,
        "Set a character as your Main ★...",
        characters,
        " ★ (current main)",
    )
}
