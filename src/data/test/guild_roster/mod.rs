use crate::{
    data::guild_roster::GuildRosterRepository, error::AppError,
    model::roster::UpsertGuildRosterBoardParam,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::builder::TestBuilder;

mod get_by_guild_id;
mod upsert;
