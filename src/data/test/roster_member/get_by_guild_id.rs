use super::*;

/// Tests listing the members of one guild.
///
/// Expected: Ok with only that guild's members in creation order
#[tokio::test]
async fn lists_members_of_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_member(db, 1, 30).await?;
    factory::create_member(db, 2, 31).await?;
    factory::create_member(db, 1, 10).await?;

    let repo = RosterMemberRepository::new(db);
    let members = repo.get_by_guild_id(1).await?;

    let user_ids: Vec<u64> = members.iter().map(|m| m.user_id).collect();
    assert_eq!(user_ids, vec![30, 10]);

    Ok(())
}
