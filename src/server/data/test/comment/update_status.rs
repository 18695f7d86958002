use super::*;

/// Tests writing a new moderation status.
///
/// Expected: Ok(true) and the stored status changed
#[tokio::test]
async fn updates_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let repo = CommentRepository::new(db);

    let updated = repo
        .update_status(comment.id, CommentStatus::Reported)
        .await?;

    assert!(updated);
    let stored = repo.find_by_id(comment.id).await?.unwrap();
    assert_eq!(stored.status, CommentStatus::Reported);

    Ok(())
}

/// Tests updating a comment that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_comment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = CommentRepository::new(db)
        .update_status(9999, CommentStatus::Verified)
        .await?;

    assert!(!updated);

    Ok(())
}

/// Tests that a corrupt stored status surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn unknown_stored_status_is_internal_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let topic = factory::create_topic(db).await?;
    let comment = factory::comment::CommentFactory::new(db, topic.id, user.id)
        .status("HIDDEN")
        .build()
        .await?;

    let result = CommentRepository::new(db).find_by_id(comment.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
