use super::*;

/// Tests getting an event by ID.
///
/// Expected: Ok(Some) for an existing event, Ok(None) otherwise
#[tokio::test]
async fn gets_event_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_event(db, 1).await?;

    let repo = EventRepository::new(db);
    let event = repo.get_by_id(stored.id).await?.unwrap();

    assert_eq!(event.id, stored.id);
    assert_eq!(event.message_id.to_string(), stored.message_id);
    assert!(repo.get_by_id(stored.id + 1).await?.is_none());

    Ok(())
}
