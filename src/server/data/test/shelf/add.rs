use super::*;

/// Tests placing a book on a shelf.
///
/// Expected: Ok with an entry for the book and shelf
#[tokio::test]
async fn adds_book_to_shelf() -> Result<(), AppError> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;

    let entry = ShelfRepository::new(db).add(book.id, Shelf::Reading).await?;

    assert_eq!(entry.book_id, book.id);
    assert_eq!(entry.shelf, Shelf::Reading);

    Ok(())
}

/// Tests that adding the same book to the same shelf twice keeps one entry.
///
/// Expected: Ok with the original entry returned and no duplicate row
#[tokio::test]
async fn adding_twice_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let repo = ShelfRepository::new(db);

    let first = repo.add(book.id, Shelf::Read).await?;
    let second = repo.add(book.id, Shelf::Read).await?;

    assert_eq!(first, second);
    assert_eq!(repo.get_by_book(book.id).await?.len(), 1);

    Ok(())
}

/// Tests that one book can sit on several different shelves.
///
/// Expected: Ok with one entry per shelf
#[tokio::test]
async fn book_can_be_on_multiple_shelves() -> Result<(), AppError> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let repo = ShelfRepository::new(db);

    repo.add(book.id, Shelf::WantToRead).await?;
    repo.add(book.id, Shelf::Reading).await?;

    let shelves: Vec<_> = repo
        .get_by_book(book.id)
        .await?
        .into_iter()
        .map(|e| e.shelf)
        .collect();
    assert_eq!(shelves, vec![Shelf::WantToRead, Shelf::Reading]);

    Ok(())
}

/// Tests that a corrupt stored shelf name surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn unknown_stored_shelf_is_internal_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    factory::create_book_shelf(db, book.id, "FAVOURITES").await?;

    let result = ShelfRepository::new(db).get_by_book(book.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
