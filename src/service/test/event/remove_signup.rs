use super::*;

/// Tests the DPS promotion scenario.
///
/// With U1..U4 signed up as DPS, removing U2 promotes U4 from the bench.
///
/// Expected: Ok(Some(U4)) with U1, U3 and U4 in main slots
#[tokio::test]
async fn removing_main_dps_promotes_bench() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db, 1).await?;

    let service = EventService::new(db);
    for user_id in 1..=4 {
        service.signup(event.id, user_id, WowRole::Dps).await?;
    }

    let promoted = service.remove_signup(event.id, 2).await?;

    assert_eq!(promoted.map(|s| s.user_id), Some(4));
    assert_eq!(
        slots(&service, event.id, WowRole::Dps).await?,
        vec![(1, false), (3, false), (4, false)]
    );

    Ok(())
}

/// Tests that promotion follows signup order.
///
/// With tank A in the main slot and B then C on the bench, removing A promotes B only.
///
/// Expected: Ok(Some(B)) with C still benched
#[tokio::test]
async fn promotes_earliest_bench_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (event, _) = factory::helpers::create_event_with_signups(
        db,
        1,
        &[(1, "Tank", false), (2, "Tank", true), (3, "Tank", true)],
    )
    .await?;

    let service = EventService::new(db);
    let promoted = service.remove_signup(event.id, 1).await?;

    assert_eq!(promoted.map(|s| s.user_id), Some(2));
    assert_eq!(
        slots(&service, event.id, WowRole::Tank).await?,
        vec![(2, false), (3, true)]
    );

    Ok(())
}

/// Tests removing a bench signup.
///
/// Expected: Ok(None) with main slots unchanged
#[tokio::test]
async fn removing_bench_promotes_nobody() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (event, _) = factory::helpers::create_event_with_signups(
        db,
        1,
        &[(1, "Healer", false), (2, "Healer", true), (3, "Healer", true)],
    )
    .await?;

    let service = EventService::new(db);
    let promoted = service.remove_signup(event.id, 2).await?;

    assert!(promoted.is_none());
    assert_eq!(
        slots(&service, event.id, WowRole::Healer).await?,
        vec![(1, false), (3, true)]
    );

    Ok(())
}

/// Tests that promotion stays within the removed signup's role.
///
/// Expected: Ok(None) when only other roles are benched
#[tokio::test]
async fn does_not_promote_other_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (event, _) = factory::helpers::create_event_with_signups(
        db,
        1,
        &[(1, "Tank", false), (2, "Healer", false), (3, "Healer", true)],
    )
    .await?;

    let service = EventService::new(db);
    let promoted = service.remove_signup(event.id, 1).await?;

    assert!(promoted.is_none());
    assert_eq!(
        slots(&service, event.id, WowRole::Healer).await?,
        vec![(2, false), (3, true)]
    );

    Ok(())
}

/// Tests removing a signup that does not exist.
///
/// Expected: Ok(None) with state unchanged, also for a missing event
#[tokio::test]
async fn removing_missing_signup_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (event, _) =
        factory::helpers::create_event_with_signups(db, 1, &[(1, "DPS", false)]).await?;

    let service = EventService::new(db);

    assert!(service.remove_signup(event.id, 2).await?.is_none());
    assert!(service.remove_signup(event.id + 1, 1).await?.is_none());
    assert_eq!(entity::prelude::EventSignup::find().count(db).await?, 1);

    Ok(())
}

/// Tests concurrent removal of two main DPS signups.
///
/// Each removal must promote a different bench signup.
///
/// Expected: Ok with both bench DPS promoted and three main DPS in total
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_removals_promote_distinct_bench() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (event, _) = factory::helpers::create_event_with_signups(
        db,
        1,
        &[
            (1, "DPS", false),
            (2, "DPS", false),
            (3, "DPS", false),
            (4, "DPS", true),
            (5, "DPS", true),
        ],
    )
    .await?;

    let mut tasks = Vec::new();
    for user_id in [1u64, 2] {
        let db = db.clone();
        let event_id = event.id;
        tasks.push(tokio::spawn(async move {
            EventService::new(&db).remove_signup(event_id, user_id).await
        }));
    }
    let mut promoted = Vec::new();
    for task in tasks {
        promoted.extend(task.await.unwrap()?.map(|s| s.user_id));
    }
    promoted.sort_unstable();

    assert_eq!(promoted, vec![4, 5]);
    let service = EventService::new(db);
    assert_eq!(
        slots(&service, event.id, WowRole::Dps).await?,
        vec![(3, false), (4, false), (5, false)]
    );

    Ok(())
}
