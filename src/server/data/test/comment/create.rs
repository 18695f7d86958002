use super::*;

/// Tests creating a comment resolves the author's nickname.
///
/// Expected: Ok with an unverified comment carrying the author name
#[tokio::test]
async fn creates_comment_with_author_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .nickname("mol_ksiazkowy")
        .build()
        .await?;
    let topic = factory::create_topic(db).await?;

    let comment = CommentRepository::new(db)
        .create(
            CreateCommentParam {
                topic_id: topic.id,
                author_id: user.id,
                message: "Polecam!".to_string(),
            },
            CommentStatus::Unverified,
        )
        .await?;

    assert_eq!(comment.message, "Polecam!");
    assert_eq!(comment.status, CommentStatus::Unverified);
    assert_eq!(comment.author_name, "mol_ksiazkowy");
    assert_eq!(comment.topic_id, topic.id);

    Ok(())
}
