pub use super::event::Entity as Event;
pub use super::event_signup::Entity as EventSignup;
pub use super::guild_roster::Entity as GuildRoster;
pub use super::roster_character::Entity as RosterCharacter;
pub use super::roster_member::Entity as RosterMember;
