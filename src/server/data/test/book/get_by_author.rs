use super::*;

/// Tests exact author and title filters.
///
/// Expected: Ok with only exact matches; partial or differently cased names match nothing
#[tokio::test]
async fn filters_by_exact_author_and_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::book::BookFactory::new(db)
        .title("Solaris")
        .author(Some("Stanisław Lem"))
        .build()
        .await?;
    factory::book::BookFactory::new(db)
        .title("Eden")
        .author(Some("Stanisław Lem"))
        .build()
        .await?;
    factory::book::BookFactory::new(db)
        .title("Solaris")
        .author(Some("Someone Else"))
        .build()
        .await?;

    let repo = BookRepository::new(db);

    let by_lem = repo.get_by_author("Stanisław Lem").await?;
    let titles: Vec<_> = by_lem.into_iter().map(|b| b.title).collect();
    assert_eq!(titles, vec!["Eden", "Solaris"]);

    assert!(repo.get_by_author("Lem").await?.is_empty());
    assert_eq!(repo.get_by_title("Solaris").await?.len(), 2);
    assert!(repo.get_by_title("solaris").await?.is_empty());

    Ok(())
}
