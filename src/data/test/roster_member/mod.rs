use crate::{data::roster_member::RosterMemberRepository, error::AppError};
use sea_orm::{EntityTrait, PaginatorTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_by_guild_id;
mod lock;
