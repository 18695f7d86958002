use super::*;

/// Tests exact and case-insensitive email lookups.
///
/// Expected: exact lookup misses a differently cased email, case-insensitive lookup finds it
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("reader@example.com")
        .build()
        .await?;
    let repo = UserRepository::new(db);

    let exact = repo.find_by_email("reader@example.com").await?;
    assert_eq!(exact.map(|u| u.id), Some(user.id));

    assert!(repo.find_by_email("Reader@Example.com").await?.is_none());

    let ignore_case = repo.find_by_email_ignore_case("Reader@Example.com").await?;
    assert_eq!(ignore_case.map(|u| u.id), Some(user.id));

    Ok(())
}
