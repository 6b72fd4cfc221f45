use super::*;

/// Tests creating the board of a guild.
///
/// Expected: Ok with one stored row
#[tokio::test]
async fn creates_new_board() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRosterRepository::new(db);
    let board = repo
        .upsert(UpsertGuildRosterBoardParam {
            guild_id: 1,
            channel_id: 10,
            message_id: 100,
        })
        .await?;

    assert_eq!(board.guild_id, 1);
    assert_eq!(board.channel_id, 10);
    assert_eq!(board.message_id, 100);

    let stored = entity::prelude::GuildRoster::find()
        .filter(entity::guild_roster::Column::GuildId.eq("1"))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.message_id, "100");

    Ok(())
}

/// Tests moving the board of a guild to another message.
///
/// Verifies the existing row is updated in place instead of a second board being
/// created.
///
/// Expected: Ok with same ID, new channel and message
#[tokio::test]
async fn moves_existing_board() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRosterRepository::new(db);
    let original = repo
        .upsert(UpsertGuildRosterBoardParam {
            guild_id: 1,
            channel_id: 10,
            message_id: 100,
        })
        .await?;

    let moved = repo
        .upsert(UpsertGuildRosterBoardParam {
            guild_id: 1,
            channel_id: 20,
            message_id: 200,
        })
        .await?;

    assert_eq!(moved.id, original.id);
    assert_eq!(moved.channel_id, 20);
    assert_eq!(moved.message_id, 200);
    assert_eq!(moved.created_at, original.created_at);
    assert!(moved.updated_at >= original.updated_at);

    let count = entity::prelude::GuildRoster::find()
        .filter(entity::guild_roster::Column::GuildId.eq("1"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that boards of different guilds do not overwrite each other.
///
/// Expected: Ok with two rows
#[tokio::test]
async fn keeps_guilds_separate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRosterRepository::new(db);
    for guild_id in [1, 2] {
        repo.upsert(UpsertGuildRosterBoardParam {
            guild_id,
            channel_id: 10,
            message_id: 100 + guild_id,
        })
        .await?;
    }

    let count = entity::prelude::GuildRoster::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
