use super::*;

/// Tests moving an unverified comment to reported.
///
/// Expected: Ok(true) and the stored status changed
#[tokio::test]
async fn moves_matching_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let repo = CommentRepository::new(db);

    let moved = repo
        .transition_status(comment.id, CommentStatus::Unverified, CommentStatus::Reported)
        .await?;

    assert!(moved);
    let stored = repo.find_by_id(comment.id).await?.unwrap();
    assert_eq!(stored.status, CommentStatus::Reported);

    Ok(())
}

/// Tests that a comment verified before the report lands keeps its status.
///
/// Expected: Ok(false) and the stored status still Verified
#[tokio::test]
async fn leaves_verified_comment_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, comment) = factory::helpers::create_comment_with_dependencies(db).await?;
    let repo = CommentRepository::new(db);
    repo.update_status(comment.id, CommentStatus::Verified)
        .await?;

    let moved = repo
        .transition_status(comment.id, CommentStatus::Unverified, CommentStatus::Reported)
        .await?;

    assert!(!moved);
    let stored = repo.find_by_id(comment.id).await?.unwrap();
    assert_eq!(stored.status, CommentStatus::Verified);

    Ok(())
}
