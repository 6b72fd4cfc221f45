use super::*;

/// Tests marking a character as main.
///
/// Expected: Ok with is_main set on the returned and stored character
#[tokio::test]
async fn marks_character_as_main() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db, 1, 42).await?;
    let character = factory::create_character(db, member.id, "Healer", "Evoker").await?;

    let repo = RosterCharacterRepository::new(db);
    let updated = repo.set_main(character.id).await?;

    assert!(updated.is_main);
    assert_eq!(updated.role, WowRole::Healer);
    assert_eq!(updated.wow_class, WowClass::Evoker);

    let stored = entity::prelude::RosterCharacter::find_by_id(character.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_main);

    Ok(())
}
