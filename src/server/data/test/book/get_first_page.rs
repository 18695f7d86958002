use super::*;

/// Tests that the listing is sorted by title.
///
/// Expected: Ok with books in ascending title order
#[tokio::test]
async fn returns_books_sorted_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for title in ["Lalka", "Ferdydurke", "Quo Vadis"] {
        factory::book::create_book_with_title(db, title).await?;
    }

    let books = BookRepository::new(db).get_first_page(20).await?;

    let titles: Vec<_> = books.into_iter().map(|b| b.title).collect();
    assert_eq!(titles, vec!["Ferdydurke", "Lalka", "Quo Vadis"]);

    Ok(())
}

/// Tests that only the first page is returned.
///
/// Expected: Ok with exactly `per_page` books
#[tokio::test]
async fn limits_to_page_size() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 0..25 {
        factory::book::create_book_with_title(db, format!("Title {:02}", i)).await?;
    }

    let books = BookRepository::new(db).get_first_page(20).await?;

    assert_eq!(books.len(), 20);
    assert_eq!(books[0].title, "Title 00");
    assert_eq!(books[19].title, "Title 19");

    Ok(())
}
