use super::*;

/// Tests enabling a user account.
///
/// Expected: Ok(Some) with enabled set to true
#[tokio::test]
async fn enables_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let updated = repo.set_enabled(user.id, true).await?;

    assert!(updated.is_some_and(|u| u.enabled));
    assert!(repo.find_by_id(user.id).await?.unwrap().enabled);

    Ok(())
}

/// Tests enabling a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(UserRepository::new(db).set_enabled(9999, true).await?.is_none());

    Ok(())
}
