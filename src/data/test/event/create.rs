use super::*;

fn param(message_id: u64) -> CreateEventParam {
    CreateEventParam {
        guild_id: 1,
        channel_id: 2,
        message_id,
        creator_id: 3,
        title: "2026-03-14".to_string(),
        description: Some("Push +12s".to_string()),
        scheduled_at: Utc.with_ymd_and_hms(2026, 3, 14, 20, 0, 0).unwrap(),
    }
}

/// Tests creating an event.
///
/// Expected: Ok with all fields stored
#[tokio::test]
async fn creates_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let event = repo.create(param(4)).await?;

    assert_eq!(event.guild_id, 1);
    assert_eq!(event.channel_id, 2);
    assert_eq!(event.message_id, 4);
    assert_eq!(event.creator_id, 3);
    assert_eq!(event.title, "2026-03-14");
    assert_eq!(event.description.as_deref(), Some("Push +12s"));
    assert_eq!(
        event.scheduled_at,
        Utc.with_ymd_and_hms(2026, 3, 14, 20, 0, 0).unwrap()
    );

    Ok(())
}

/// Tests that two events cannot be bound to the same message.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_message_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    repo.create(param(4)).await?;
    let result = repo.create(param(4)).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(entity::prelude::Event::find().count(db).await?, 1);

    Ok(())
}
