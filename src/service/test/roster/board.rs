use super::*;
use crate::model::roster::UpsertGuildRosterBoardParam;

/// Tests setting up and then moving the roster board.
///
/// Expected: Ok with get_board returning the latest location
#[tokio::test]
async fn upsert_then_get_board() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RosterService::new(db);

    assert!(service.get_board(GUILD_ID).await?.is_none());

    service
        .upsert_board(UpsertGuildRosterBoardParam {
            guild_id: GUILD_ID,
            channel_id: 1,
            message_id: 2,
        })
        .await?;
    service
        .upsert_board(UpsertGuildRosterBoardParam {
            guild_id: GUILD_ID,
            channel_id: 3,
            message_id: 4,
        })
        .await?;

    let board = service.get_board(GUILD_ID).await?.unwrap();
    assert_eq!(board.channel_id, 3);
    assert_eq!(board.message_id, 4);

    Ok(())
}
