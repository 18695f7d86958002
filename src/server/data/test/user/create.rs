use super::*;

/// Tests creating a user account.
///
/// Verifies that the email is normalized and the account starts disabled.
///
/// Expected: Ok with lowercased email and enabled set to false
#[tokio::test]
async fn creates_disabled_user_with_normalized_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(RegisterUserParam {
            email: " Reader@Example.com".to_string(),
            nickname: "reader".to_string(),
        })
        .await?;

    assert_eq!(user.email, "reader@example.com");
    assert_eq!(user.nickname, "reader");
    assert!(!user.enabled);

    Ok(())
}

/// Tests that the unique index rejects an email differing only in case.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_email_differing_in_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(RegisterUserParam {
        email: "reader@example.com".to_string(),
        nickname: "reader".to_string(),
    })
    .await?;

    let result = repo
        .create(RegisterUserParam {
            email: "READER@example.com".to_string(),
            nickname: "reader2".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
