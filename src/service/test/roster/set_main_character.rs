use super::*;

/// Tests moving the main flag to another character.
///
/// Expected: Ok(true) with exactly one main, the chosen character
#[tokio::test]
async fn moves_main_to_chosen_character() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RosterService::new(db);
    service
        .add_character(character(WowRole::Tank, WowClass::Paladin))
        .await?;
    service
        .add_character(character(WowRole::Healer, WowClass::Paladin))
        .await?;
    service
        .add_character(character(WowRole::Dps, WowClass::Warlock))
        .await?;

    let changed = service
        .set_main_character(character(WowRole::Healer, WowClass::Paladin))
        .await?;

    assert!(changed);

    let snapshot = service.snapshot(GUILD_ID).await?;
    let mains: Vec<_> = snapshot[&USER_ID].iter().filter(|c| c.is_main).collect();
    assert_eq!(mains.len(), 1);
    assert_eq!(mains[0].role, WowRole::Healer);
    assert_eq!(mains[0].wow_class, WowClass::Paladin);

    Ok(())
}

/// Tests choosing a character the member does not have.
///
/// Verifies the current main stays in place instead of the member ending up without one.
///
/// Expected: Ok(false) with the previous main unchanged
#[tokio::test]
async fn unknown_character_keeps_current_main() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RosterService::new(db);
    service
        .add_character(character(WowRole::Dps, WowClass::Mage))
        .await?;
    service
        .add_character(character(WowRole::Dps, WowClass::Rogue))
        .await?;

    let changed = service
        .set_main_character(character(WowRole::Tank, WowClass::Warrior))
        .await?;

    assert!(!changed);
    assert_eq!(mains_of(&service, USER_ID).await?, vec![WowClass::Mage]);

    Ok(())
}

/// Tests setting a main for a user who is not on the roster.
///
/// Expected: Ok(false) with nothing created
#[tokio::test]
async fn missing_member_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RosterService::new(db);
    let changed = service
        .set_main_character(character(WowRole::Dps, WowClass::Mage))
        .await?;

    assert!(!changed);
    assert_eq!(entity::prelude::RosterMember::find().count(db).await?, 0);

    Ok(())
}
