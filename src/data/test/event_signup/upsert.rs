use super::*;

/// Tests creating a signup.
///
/// Expected: Ok with the signup stored
#[tokio::test]
async fn creates_signup() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db, 1).await?;

    let repo = EventSignupRepository::new(db);
    let signup = repo.upsert(event.id, 42, WowRole::Healer, false).await?;

    assert_eq!(signup.event_id, event.id);
    assert_eq!(signup.user_id, 42);
    assert_eq!(signup.role, WowRole::Healer);
    assert!(!signup.is_bench);

    Ok(())
}

/// Tests that a second signup by the same user replaces the first.
///
/// Expected: Ok with the same row ID, new role and bench status, one row in total
#[tokio::test]
async fn replaces_existing_signup() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db, 1).await?;

    let repo = EventSignupRepository::new(db);
    let first = repo.upsert(event.id, 42, WowRole::Tank, false).await?;
    let second = repo.upsert(event.id, 42, WowRole::Dps, true).await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.role, WowRole::Dps);
    assert!(second.is_bench);
    assert!(second.signed_up_at >= first.signed_up_at);
    assert_eq!(entity::prelude::EventSignup::find().count(db).await?, 1);

    Ok(())
}
