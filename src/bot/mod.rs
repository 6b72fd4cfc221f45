//! Discord bot integration for the guild roster and event signups.
//!
//! The bot only needs the `GUILDS` gateway intent: every user action arrives as an
//! interaction (slash command, button, select menu or modal submit), and all replies are
//! sent through the interaction or by editing the bot's own messages.
//!
//! Layout:
//! - `start` builds the serenity client
//! - `command` defines and registers the slash commands
//! - `component` encodes and decodes component custom ids
//! - `view` renders domain snapshots into embeds and components
//! - `handler` routes interactions to the roster and event services

pub mod command;
pub mod component;
pub mod handler;
pub mod start;
pub mod view;
