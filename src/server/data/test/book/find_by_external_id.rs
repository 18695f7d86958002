use super::*;

/// Tests finding a stored book by its provider volume id.
///
/// Expected: Ok(Some) for the stored volume, Ok(None) for another
#[tokio::test]
async fn finds_book_by_external_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::book::BookFactory::new(db)
        .external_id(Some("vol-1"))
        .build()
        .await?;
    factory::create_book(db).await?;

    let repo = BookRepository::new(db);

    let found = repo.find_by_external_id("vol-1").await?;
    assert_eq!(found.and_then(|b| b.id), Some(book.id));

    let missing = repo.find_by_external_id("vol-2").await?;
    assert!(missing.is_none());

    Ok(())
}
