use super::*;

/// Tests removing a member with several characters.
///
/// Expected: Ok with the member and all characters gone, other members untouched
#[tokio::test]
async fn removes_member_and_characters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_member_with_characters(
        db,
        GUILD_ID,
        USER_ID,
        &[("Tank", "Druid", true), ("Healer", "Druid", false)],
    )
    .await?;
    factory::helpers::create_member_with_characters(
        db,
        GUILD_ID,
        USER_ID + 1,
        &[("DPS", "Hunter", true)],
    )
    .await?;

    let service = RosterService::new(db);
    service.remove_member(GUILD_ID, USER_ID).await?;

    let snapshot = service.snapshot(GUILD_ID).await?;
    assert!(!snapshot.contains_key(&USER_ID));
    assert!(snapshot.contains_key(&(USER_ID + 1)));
    assert_eq!(entity::prelude::RosterCharacter::find().count(db).await?, 1);

    Ok(())
}

/// Tests removing a member twice.
///
/// Expected: Ok both times
#[tokio::test]
async fn removal_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_member_with_characters(
        db,
        GUILD_ID,
        USER_ID,
        &[("DPS", "Rogue", true)],
    )
    .await?;

    let service = RosterService::new(db);
    service.remove_member(GUILD_ID, USER_ID).await?;
    service.remove_member(GUILD_ID, USER_ID).await?;

    assert_eq!(entity::prelude::RosterMember::find().count(db).await?, 0);

    Ok(())
}
