use crate::{
    error::AppError,
    model::{
        roster::CharacterParam,
        wow::{WowClass, WowRole},
    },
    service::roster::RosterService,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod board;
mod remove_member;
mod set_main_character;
mod snapshot;

const GUILD_ID: u64 = 1000;
const USER_ID: u64 = 42;

fn character(role: WowRole, wow_class: WowClass) -> CharacterParam {
    CharacterParam {
        guild_id: GUILD_ID,
        user_id: USER_ID,
        role,
        wow_class,
    }
}

/// Returns the classes of a user's characters flagged as main.
async fn mains_of(
    service: &RosterService<'_>,
    user_id: u64,
) -> Result<Vec<WowClass>, AppError> {
    let snapshot = service.snapshot(GUILD_ID).await?;

    Ok(snapshot
        .get(&user_id)
        .map(|characters| {
            characters
                .iter()
                .filter(|c| c.is_main)
                .map(|c| c.wow_class)
                .collect()
        })
        .unwrap_or_default())
}
