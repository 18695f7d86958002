use super::*;

/// Tests storing a book fetched from the remote provider.
///
/// Verifies that the repository assigns an id and keeps every field, ignoring
/// any id already present on the domain model.
///
/// Expected: Ok with book stored under a fresh id
#[tokio::test]
async fn stores_book_with_new_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookRepository::new(db);
    let stored = repo
        .create(Book {
            id: Some(999),
            external_id: Some("vol-1".to_string()),
            title: "Solaris".to_string(),
            author: Some("Stanisław Lem".to_string()),
            year: 1961,
            description: Some("Ocean".to_string()),
            picture_url: None,
            pages: Some(240),
            rating: 4.5,
        })
        .await?;

    assert_ne!(stored.id, Some(999));
    assert_eq!(stored.external_id.as_deref(), Some("vol-1"));
    assert_eq!(stored.title, "Solaris");
    assert_eq!(stored.rating, 4.5);

    let found = repo.find_by_id(stored.id.unwrap()).await?;
    assert_eq!(found, Some(stored));

    Ok(())
}

/// Tests looking up an id that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookRepository::new(db).find_by_id(9999).await?;

    assert!(result.is_none());

    Ok(())
}
