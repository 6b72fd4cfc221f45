use super::*;
use test_utils::factory;

/// Tests getting the board of a guild that has set one up.
///
/// Expected: Ok(Some) with parsed IDs
#[tokio::test]
async fn returns_board_for_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_guild_roster(db, 555).await?;
    factory::create_guild_roster(db, 556).await?;

    let repo = GuildRosterRepository::new(db);
    let board = repo.get_by_guild_id(555).await?;

    assert!(board.is_some());
    let board = board.unwrap();
    assert_eq!(board.id, stored.id);
    assert_eq!(board.guild_id, 555);
    assert_eq!(board.channel_id.to_string(), stored.channel_id);
    assert_eq!(board.message_id.to_string(), stored.message_id);

    Ok(())
}

/// Tests getting the board of a guild without a roster.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_board() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRosterRepository::new(db);
    let board = repo.get_by_guild_id(555).await?;

    assert!(board.is_none());

    Ok(())
}
