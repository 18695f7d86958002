use super::*;

/// Tests deleting an existing comment.
///
/// Expected: Ok(true) and the comment no longer found
#[tokio::test]
async fn deletes_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let repo = CommentRepository::new(db);

    assert!(repo.delete(comment.id).await?);
    assert!(repo.find_by_id(comment.id).await?.is_none());

    Ok(())
}

/// Tests deleting a comment that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!CommentRepository::new(db).delete(9999).await?);

    Ok(())
}
