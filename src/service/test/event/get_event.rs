use super::*;

/// Tests looking up an event with its signups by ID and by message.
///
/// Expected: Ok(Some) with signups in signup order from both lookups
#[tokio::test]
async fn returns_event_with_ordered_signups() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (event, _) = factory::helpers::create_event_with_signups(
        db,
        1,
        &[(5, "Healer", false), (6, "DPS", false), (7, "Healer", true)],
    )
    .await?;
    let message_id: u64 = event.message_id.parse().unwrap();

    let service = EventService::new(db);
    let by_id = service.get_event_by_id(event.id).await?.unwrap();
    let by_message = service.get_event_by_message_id(message_id).await?.unwrap();

    assert_eq!(by_id, by_message);

    let user_ids: Vec<u64> = by_id.signups.iter().map(|s| s.user_id).collect();
    assert_eq!(user_ids, vec![5, 6, 7]);
    assert_eq!(by_id.main_slots(WowRole::Healer).count(), 1);
    assert_eq!(by_id.bench().count(), 1);
    assert!(by_id.signup_for(6).is_some());
    assert!(by_id.signup_for(8).is_none());

    Ok(())
}

/// Tests looking up events that do not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_event_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EventService::new(db);

    assert!(service.get_event_by_id(1).await?.is_none());
    assert!(service.get_event_by_message_id(1).await?.is_none());

    Ok(())
}
