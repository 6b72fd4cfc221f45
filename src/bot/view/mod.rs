//! Rendering of roster and event state into Discord embeds and components.
//!
//! Text is produced by plain functions so it can be tested without Discord; the
//! `build_*` functions wrap that text in serenity builders.

pub mod event;
pub mod roster;

use serenity::all::ReactionType;

use crate::model::wow::WowRole;

/// Colour shared by the roster and event embeds.
pub const EMBED_COLOR: u32 = 0xC69B3A;

/// Discord's limit for a single embed field value.
const FIELD_VALUE_LIMIT: usize = 1024;

pub(crate) fn role_emoji(role: WowRole) -> ReactionType {
    ReactionType::Unicode(role.emoji().to_string())
}

/// Joins lines into an embed field value, dropping trailing lines that do not fit.
///
/// Dropped lines are summarised as `…and N more`.
pub(crate) fn fit_field_value(lines: &[String]) -> String {
    let mut value = String::new();

    for (index, line) in lines.iter().enumerate() {
        let remaining = lines.len() - index;
        let suffix = format!("\n…and {} more", remaining);
        let separator = if value.is_empty() { 0 } else { 1 };

        let is_last = remaining == 1;
        let reserve = if is_last { 0 } else { suffix.chars().count() };

        if value.chars().count() + separator + line.chars().count() + reserve > FIELD_VALUE_LIMIT {
            value.push_str(&suffix);
            return value;
        }

        if separator == 1 {
            value.push('\n');
        }
        value.push_str(line);
    }

    value
}
