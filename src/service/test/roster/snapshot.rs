use super::*;

/// Tests the shape of a guild snapshot.
///
/// Verifies characters are sorted by role then class, and members of other guilds or
/// without characters are left out.
///
/// Expected: Ok with sorted characters per user
#[tokio::test]
async fn groups_and_sorts_characters_per_user() -> Result<(), AppError> {
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
        &[
            ("DPS", "Warrior", false),
            ("DPS", "Death Knight", true),
            ("Healer", "Priest", false),
            ("Tank", "Warrior", false),
        ],
    )
    .await?;
    factory::helpers::create_member_with_characters(
        db,
        GUILD_ID + 1,
        USER_ID + 1,
        &[("DPS", "Mage", true)],
    )
    .await?;
    factory::create_member(db, GUILD_ID, USER_ID + 2).await?;

    let service = RosterService::new(db);
    let snapshot = service.snapshot(GUILD_ID).await?;

    assert_eq!(snapshot.len(), 1);

    let order: Vec<(WowRole, WowClass)> = snapshot[&USER_ID]
        .iter()
        .map(|c| (c.role, c.wow_class))
        .collect();
    assert_eq!(
        order,
        vec![
            (WowRole::Tank, WowClass::Warrior),
            (WowRole::Healer, WowClass::Priest),
            (WowRole::Dps, WowClass::DeathKnight),
            (WowRole::Dps, WowClass::Warrior),
        ]
    );

    Ok(())
}

/// Tests the snapshot of a guild without members.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn empty_guild_has_empty_snapshot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RosterService::new(db);

    assert!(service.snapshot(GUILD_ID).await?.is_empty());

    Ok(())
}
