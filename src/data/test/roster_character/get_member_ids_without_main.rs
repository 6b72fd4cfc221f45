use super::*;

/// Tests finding members that have characters but no main.
///
/// Expected: Ok with only the member lacking a main; members without characters are
/// not reported
#[tokio::test]
async fn reports_members_missing_a_main() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_member_with_characters(
        db,
        1,
        1,
        &[("Tank", "Warrior", true), ("DPS", "Mage", false)],
    )
    .await?;
    let (missing, _) = factory::helpers::create_member_with_characters(
        db,
        1,
        2,
        &[("DPS", "Rogue", false), ("DPS", "Hunter", false)],
    )
    .await?;
    factory::create_member(db, 1, 3).await?;

    let repo = RosterCharacterRepository::new(db);
    let member_ids = repo.get_member_ids_without_main().await?;

    assert_eq!(member_ids, vec![missing.id]);

    Ok(())
}
