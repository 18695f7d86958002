use super::*;

/// Tests that featured books are the earliest four stored.
///
/// Expected: Ok with four books in id order
#[tokio::test]
async fn returns_first_four_books_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_book_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for title in ["Z", "Y", "X", "W", "V"] {
        ids.push(factory::book::create_book_with_title(db, title).await?.id);
    }

    let featured = BookRepository::new(db).get_featured(4).await?;

    let featured_ids: Vec<_> = featured.into_iter().filter_map(|b| b.id).collect();
    assert_eq!(featured_ids, ids[..4].to_vec());

    Ok(())
}
