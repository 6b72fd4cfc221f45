use super::*;

/// Tests locking a member scoped to guild and user.
///
/// Verifies that the same user in another guild is a different member.
///
/// Expected: Ok(Some) for the matching guild only
#[tokio::test]
async fn locks_member_in_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_member(db, 1, 42).await?;
    factory::create_member(db, 2, 42).await?;

    let txn = db.begin().await?;
    let repo = RosterMemberRepository::new(&txn);
    let member = repo.lock(1, 42).await?.unwrap();

    assert_eq!(member.id, stored.id);
    assert_eq!(member.guild_id, 1);
    assert_eq!(member.user_id, 42);

    assert!(repo.lock(3, 42).await?.is_none());

    txn.commit().await?;

    Ok(())
}
