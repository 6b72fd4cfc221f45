//! Custom ids of message components and modals.
//!
//! Discord echoes a component's custom id back with every interaction, so any state a
//! follow-up step needs (the role picked before the class, the event a role picker
//! belongs to) is carried in the id itself as `<prefix>:<value>`.

use crate::{
    error::internal::InternalError,
    model::wow::{WowClass, WowRole},
};

pub const ROSTER_ADD_CHARACTER: &str = "roster_add_character";
pub const ROSTER_REMOVE_ME: &str = "roster_remove_me";
pub const ROSTER_ROLE_SELECT: &str = "roster_role_select";
pub const ROSTER_CLASS_SELECT: &str = "roster_class_select";
pub const ROSTER_REMOVE_CHARACTER_SELECT: &str = "roster_remove_character_select";
pub const ROSTER_SET_MAIN_SELECT: &str = "roster_set_main_select";

pub const EVENT_SIGNUP: &str = "event_signup";
pub const EVENT_REMOVE: &str = "event_remove";
pub const EVENT_CANCEL: &str = "event_cancel";
pub const EVENT_ROLE_SELECT: &str = "event_role_select";

pub const EVENT_CREATE_MODAL: &str = "event_create_modal";
pub const EVENT_DATE_INPUT: &str = "event_date";
pub const EVENT_TIME_INPUT: &str = "event_time";
pub const EVENT_DESCRIPTION_INPUT: &str = "event_description";

/// A decoded component interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentAction {
    RosterAddCharacter,
    RosterRemoveMe,
    RosterRoleSelect,
    RosterClassSelect(WowRole),
    RosterRemoveCharacterSelect,
    RosterSetMainSelect,
    EventSignup,
    EventRemove,
    EventCancel,
    EventRoleSelect(i32),
}

impl ComponentAction {
    /// Decodes a component custom id.
    ///
    /// # Returns
    /// - `Ok(ComponentAction)` - Known component
    /// - `Err(InternalError)` - Unknown prefix, or a carried role or event id that does
    ///   not parse
    pub fn parse(custom_id: &str) -> Result<Self, InternalError> {
        let malformed = || InternalError::MalformedCustomId(custom_id.to_string());

        let action = match custom_id.split_once(':') {
            None => match custom_id {
                ROSTER_ADD_CHARACTER => ComponentAction::RosterAddCharacter,
                ROSTER_REMOVE_ME => ComponentAction::RosterRemoveMe,
                ROSTER_ROLE_SELECT => ComponentAction::RosterRoleSelect,
                ROSTER_REMOVE_CHARACTER_SELECT => ComponentAction::RosterRemoveCharacterSelect,
                ROSTER_SET_MAIN_SELECT => ComponentAction::RosterSetMainSelect,
                EVENT_SIGNUP => ComponentAction::EventSignup,
                EVENT_REMOVE => ComponentAction::EventRemove,
                EVENT_CANCEL => ComponentAction::EventCancel,
                _ => return Err(malformed()),
            },
            Some((ROSTER_CLASS_SELECT, role)) => ComponentAction::RosterClassSelect(role.parse()?),
            Some((EVENT_ROLE_SELECT, event_id)) => {
                ComponentAction::EventRoleSelect(event_id.parse().map_err(|_| malformed())?)
            }
            Some(_) => return Err(malformed()),
        };

        Ok(action)
    }

    /// Encodes the action as a custom id.
    pub fn custom_id(&self) -> String {
        match self {
            ComponentAction::RosterAddCharacter => ROSTER_ADD_CHARACTER.to_string(),
            ComponentAction::RosterRemoveMe => ROSTER_REMOVE_ME.to_string(),
            ComponentAction::RosterRoleSelect => ROSTER_ROLE_SELECT.to_string(),
            ComponentAction::RosterClassSelect(role) => {
                format!("{}:{}", ROSTER_CLASS_SELECT, role.name())
            }
            ComponentAction::RosterRemoveCharacterSelect => {
                ROSTER_REMOVE_CHARACTER_SELECT.to_string()
            }
            ComponentAction::RosterSetMainSelect => ROSTER_SET_MAIN_SELECT.to_string(),
            ComponentAction::EventSignup => EVENT_SIGNUP.to_string(),
            ComponentAction::EventRemove => EVENT_REMOVE.to_string(),
            ComponentAction::EventCancel => EVENT_CANCEL.to_string(),
            ComponentAction::EventRoleSelect(event_id) => {
                format!("{}:{}", EVENT_ROLE_SELECT, event_id)
            }
        }
    }
}

/// Encodes a character as a select option value, e.g. `Tank:Death Knight`.
pub fn character_value(role: WowRole, wow_class: WowClass) -> String {
    format!("{}:{}", role.name(), wow_class.name())
}

/// Decodes a select option value produced by [`character_value`].
pub fn parse_character_value(value: &str) -> Result<(WowRole, WowClass), InternalError> {
    let (role, wow_class) = value
        .split_once(':')
        .ok_or_else(|| InternalError::MalformedCustomId(value.to_string()))?;

    Ok((role.parse()?, wow_class.parse()?))
}
