use serenity::all::{ActivityData, Context, Ready};

use crate::bot::command;

pub async fn handle_ready(ctx: &Context, ready: &Ready, dev_guild_id: Option<u64>) {
    tracing::info!("{} is connected to Discord!", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Organizing keys")));

    // Registration failures leave the previous command set in place
    if let Err(e) = command::register(ctx, dev_guild_id).await {
        tracing::error!("Failed to register slash commands: {:?}", e);
    }
}
