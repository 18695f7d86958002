use super::*;

/// Tests the email and nickname existence checks.
///
/// Expected: email check ignores case, nickname check is exact
#[tokio::test]
async fn checks_email_and_nickname_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("reader@example.com")
        .nickname("reader")
        .build()
        .await?;
    let repo = UserRepository::new(db);

    assert!(repo.exists_by_email("READER@EXAMPLE.COM").await?);
    assert!(!repo.exists_by_email("other@example.com").await?);
    assert!(repo.exists_by_nickname("reader").await?);
    assert!(!repo.exists_by_nickname("writer").await?);

    Ok(())
}
