use super::*;

/// Tests storing a token and finding it by value and by user.
///
/// Expected: Ok with the token retrievable both ways
#[tokio::test]
async fn creates_and_finds_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = ConfirmationTokenRepository::new(db);

    let token = repo
        .create(user.id, "abcdefghijklmnopqrstuvwxyz012345".to_string())
        .await?;

    assert_eq!(token.user_id, user.id);
    assert_eq!(
        repo.find_by_token("abcdefghijklmnopqrstuvwxyz012345").await?,
        Some(token.clone())
    );
    assert_eq!(repo.find_by_user_id(user.id).await?, Some(token));
    assert!(repo.find_by_token("unknown").await?.is_none());

    Ok(())
}

/// Tests that a user can hold only one token.
///
/// Expected: Err(DbErr) on the second token for the same user
#[tokio::test]
async fn rejects_second_token_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_confirmation_token(db, user.id).await?;

    let result = ConfirmationTokenRepository::new(db)
        .create(user.id, "another-token".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
