use super::*;

/// Tests creating an event.
///
/// Expected: Ok with no signups and the event retrievable by its message
#[tokio::test]
async fn creates_event_without_signups() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EventService::new(db);
    let created = service
        .create_event(CreateEventParam {
            guild_id: 1,
            channel_id: 2,
            message_id: 3,
            creator_id: 4,
            title: "2026-05-01".to_string(),
            description: None,
            scheduled_at: Utc.with_ymd_and_hms(2026, 5, 1, 19, 30, 0).unwrap(),
        })
        .await?;

    assert!(created.signups.is_empty());
    assert_eq!(created.event.creator_id, 4);

    let fetched = service.get_event_by_message_id(3).await?.unwrap();
    assert_eq!(fetched, created);

    Ok(())
}
