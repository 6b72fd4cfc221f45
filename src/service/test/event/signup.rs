use super::*;

/// Tests filling the DPS slots in order.
///
/// Signing up U1..U4 as DPS puts the first three in main slots and U4 on the bench.
///
/// Expected: Ok with U1-U3 main and U4 bench
#[tokio::test]
async fn fourth_dps_goes_to_bench() -> Result<(), AppError> {
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

    assert_eq!(
        slots(&service, event.id, WowRole::Dps).await?,
        vec![(1, false), (2, false), (3, false), (4, true)]
    );

    Ok(())
}

/// Tests the single tank and healer slots.
///
/// Expected: Ok with the second tank and second healer benched
#[tokio::test]
async fn tank_and_healer_have_one_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db, 1).await?;

    let service = EventService::new(db);
    let first_tank = service.signup(event.id, 1, WowRole::Tank).await?;
    let second_tank = service.signup(event.id, 2, WowRole::Tank).await?;
    let first_healer = service.signup(event.id, 3, WowRole::Healer).await?;
    let second_healer = service.signup(event.id, 4, WowRole::Healer).await?;

    assert!(!first_tank.is_bench);
    assert!(second_tank.is_bench);
    assert!(!first_healer.is_bench);
    assert!(second_healer.is_bench);

    Ok(())
}

/// Tests that main slots never exceed the role limit across many signups.
///
/// Expected: Ok with at most the slot limit of non-bench signups per role
#[tokio::test]
async fn main_slots_never_exceed_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db, 1).await?;

    let service = EventService::new(db);
    let roles = [WowRole::Dps, WowRole::Tank, WowRole::Healer];
    for user_id in 0..15u64 {
        let role = roles[(user_id % 3) as usize];
        service.signup(event.id, user_id, role).await?;
    }

    let event = service.get_event_by_id(event.id).await?.unwrap();
    for role in WowRole::ALL {
        assert_eq!(
            event.main_slots(role).count() as u64,
            role.slot_limit(),
            "role {} over or under filled",
            role
        );
    }
    assert_eq!(event.signups.len(), 15);

    Ok(())
}

/// Tests signing up again with the same role.
///
/// Expected: Ok with the same row, slot and queue position
#[tokio::test]
async fn same_role_resignup_keeps_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db, 1).await?;

    let service = EventService::new(db);
    service.signup(event.id, 1, WowRole::Tank).await?;
    let benched = service.signup(event.id, 2, WowRole::Tank).await?;
    let again = service.signup(event.id, 2, WowRole::Tank).await?;

    assert_eq!(again, benched);
    assert_eq!(
        slots(&service, event.id, WowRole::Tank).await?,
        vec![(1, false), (2, true)]
    );

    Ok(())
}

/// Tests that a user holds at most one signup per event.
///
/// Expected: Ok with the signup replaced in place when the role changes
#[tokio::test]
async fn role_change_replaces_signup() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db, 1).await?;

    let service = EventService::new(db);
    let first = service.signup(event.id, 1, WowRole::Healer).await?;
    let second = service.signup(event.id, 1, WowRole::Dps).await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.role, WowRole::Dps);
    assert!(!second.is_bench);
    assert_eq!(entity::prelude::EventSignup::find().count(db).await?, 1);

    Ok(())
}

/// Tests leaving a main slot by switching role.
///
/// Verifies the earliest bench signup of the vacated role is promoted.
///
/// Expected: Ok with the waiting tank promoted and the switcher benched as DPS
#[tokio::test]
async fn role_change_out_of_main_slot_promotes_bench() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db, 1).await?;

    let service = EventService::new(db);
    service.signup(event.id, 1, WowRole::Tank).await?;
    service.signup(event.id, 2, WowRole::Tank).await?;
    service.signup(event.id, 3, WowRole::Tank).await?;
    for user_id in 10..13 {
        service.signup(event.id, user_id, WowRole::Dps).await?;
    }

    let switched = service.signup(event.id, 1, WowRole::Dps).await?;

    assert!(switched.is_bench);
    assert_eq!(
        slots(&service, event.id, WowRole::Tank).await?,
        vec![(2, false), (3, true)]
    );

    Ok(())
}

/// Tests switching role from the bench.
///
/// Expected: Ok with no promotion in the old role
#[tokio::test]
async fn role_change_from_bench_promotes_nobody() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db, 1).await?;

    let service = EventService::new(db);
    service.signup(event.id, 1, WowRole::Healer).await?;
    service.signup(event.id, 2, WowRole::Healer).await?;
    service.signup(event.id, 3, WowRole::Healer).await?;

    let switched = service.signup(event.id, 2, WowRole::Tank).await?;

    assert!(!switched.is_bench);
    assert_eq!(
        slots(&service, event.id, WowRole::Healer).await?,
        vec![(1, false), (3, true)]
    );

    Ok(())
}

/// Tests signing up for an event that does not exist.
///
/// Expected: Err(AppError::NotFound) with nothing written
#[tokio::test]
async fn missing_event_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EventService::new(db);
    let result = service.signup(99, 1, WowRole::Dps).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::EventSignup::find().count(db).await?, 0);

    Ok(())
}

/// Tests concurrent signups racing for the single tank slot.
///
/// Eight users claim tank at the same time; the event row lock applies them one at a time.
///
/// Expected: Ok for every signup with exactly one tank in the main slot
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_signups_fill_one_tank_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db, 1).await?;

    let mut tasks = Vec::new();
    for user_id in 1..=8u64 {
        let db = db.clone();
        let event_id = event.id;
        tasks.push(tokio::spawn(async move {
            EventService::new(&db)
                .signup(event_id, user_id, WowRole::Tank)
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap()?;
    }

    let service = EventService::new(db);
    let tanks = slots(&service, event.id, WowRole::Tank).await?;
    assert_eq!(tanks.len(), 8);
    assert_eq!(tanks.iter().filter(|(_, bench)| !bench).count(), 1);

    Ok(())
}
