//! World of Warcraft roles and classes.

use std::{fmt, str::FromStr};

use crate::error::internal::InternalError;

const TANK_CLASSES: &[WowClass] = &[
    WowClass::DeathKnight,
    WowClass::DemonHunter,
    WowClass::Druid,
    WowClass::Monk,
    WowClass::Paladin,
    WowClass::Warrior,
];

const HEALER_CLASSES: &[WowClass] = &[
    WowClass::Druid,
    WowClass::Evoker,
    WowClass::Monk,
    WowClass::Paladin,
    WowClass::Priest,
    WowClass::Shaman,
];

/// Group role a character can fill and an event signup can claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WowRole {
    Tank,
    Healer,
    Dps,
}

impl WowRole {
    /// All roles in display order.
    pub const ALL: [WowRole; 3] = [WowRole::Tank, WowRole::Healer, WowRole::Dps];

    /// Stored and displayed name.
    pub fn name(&self) -> &'static str {
        match self {
            WowRole::Tank => "Tank",
            WowRole::Healer => "Healer",
            WowRole::Dps => "DPS",
        }
    }

    /// Number of non-bench event slots for this role.
    pub fn slot_limit(&self) -> u64 {
        match self {
            WowRole::Tank => 1,
            WowRole::Healer => 1,
            WowRole::Dps => 3,
        }
    }

    /// Coloured dot used in menus and embeds.
    pub fn emoji(&self) -> &'static str {
        match self {
            WowRole::Tank => "\u{1F535}",
            WowRole::Healer => "\u{1F7E2}",
            WowRole::Dps => "\u{1F534}",
        }
    }

    /// Classes able to fill this role, alphabetically.
    pub fn classes(&self) -> &'static [WowClass] {
        match self {
            WowRole::Tank => TANK_CLASSES,
            WowRole::Healer => HEALER_CLASSES,
            WowRole::Dps => &WowClass::ALL,
        }
    }
}

impl fmt::Display for WowRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WowRole {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WowRole::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| InternalError::UnknownRole(s.to_string()))
    }
}

/// Playable class.
///
/// Variants are declared alphabetically by display name, so the derived `Ord` matches
/// the string order used in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WowClass {
    DeathKnight,
    DemonHunter,
    Druid,
    Evoker,
    Hunter,
    Mage,
    Monk,
    Paladin,
    Priest,
    Rogue,
    Shaman,
    Warlock,
    Warrior,
}

impl WowClass {
    pub const ALL: [WowClass; 13] = [
        WowClass::DeathKnight,
        WowClass::DemonHunter,
        WowClass::Druid,
        WowClass::Evoker,
        WowClass::Hunter,
        WowClass::Mage,
        WowClass::Monk,
        WowClass::Paladin,
        WowClass::Priest,
        WowClass::Rogue,
        WowClass::Shaman,
        WowClass::Warlock,
        WowClass::Warrior,
    ];

    /// Stored and displayed name.
    pub fn name(&self) -> &'static str {
        match self {
            WowClass::DeathKnight => "Death Knight",
            WowClass::DemonHunter => "Demon Hunter",
            WowClass::Druid => "Druid",
            WowClass::Evoker => "Evoker",
            WowClass::Hunter => "Hunter",
            WowClass::Mage => "Mage",
            WowClass::Monk => "Monk",
            WowClass::Paladin => "Paladin",
            WowClass::Priest => "Priest",
            WowClass::Rogue => "Rogue",
            WowClass::Shaman => "Shaman",
            WowClass::Warlock => "Warlock",
            WowClass::Warrior => "Warrior",
        }
    }

    /// Whether this class can fill the given role.
    pub fn can_fill(&self, role: WowRole) -> bool {
        role.classes().contains(self)
    }
}

impl fmt::Display for WowClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WowClass {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WowClass::ALL
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or_else(|| InternalError::UnknownClass(s.to_string()))
    }
}
