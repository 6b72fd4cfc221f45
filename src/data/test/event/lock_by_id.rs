use super::*;

/// Tests locking an event by ID inside a transaction.
///
/// Expected: Ok(Some) for an existing event, Ok(None) otherwise
#[tokio::test]
async fn locks_event_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_event(db, 1).await?;

    let txn = db.begin().await?;
    let repo = EventRepository::new(&txn);

    let event = repo.lock_by_id(stored.id).await?.unwrap();
    assert_eq!(event.id, stored.id);
    assert!(repo.lock_by_id(stored.id + 1).await?.is_none());

    txn.commit().await?;

    Ok(())
}
