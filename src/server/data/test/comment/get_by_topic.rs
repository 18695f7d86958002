use super::*;

/// Tests that comments are returned newest first.
///
/// Creates comments with creation times out of insertion order and verifies the
/// listing is non-increasing in creation time.
///
/// Expected: Ok with comments sorted by creation time descending
#[tokio::test]
async fn returns_comments_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let topic = factory::create_topic(db).await?;
    let now = Utc::now();

    for offset in [3, 1, 2] {
        factory::comment::CommentFactory::new(db, topic.id, user.id)
            .created_at(now - Duration::minutes(offset))
            .build()
            .await?;
    }

    let comments = CommentRepository::new(db).get_by_topic(topic.id).await?;

    assert_eq!(comments.len(), 3);
    assert!(comments
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
    assert!(comments.iter().all(|c| c.author_name == user.nickname));

    Ok(())
}

/// Tests that comments created at the same instant are ordered by id descending.
///
/// Expected: Ok with the later inserted comment first
#[tokio::test]
async fn breaks_ties_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let topic = factory::create_topic(db).await?;
    let now = Utc::now();

    let first = factory::comment::CommentFactory::new(db, topic.id, user.id)
        .created_at(now)
        .build()
        .await?;
    let second = factory::comment::CommentFactory::new(db, topic.id, user.id)
        .created_at(now)
        .build()
        .await?;

    let comments = CommentRepository::new(db).get_by_topic(topic.id).await?;

    let ids: Vec<_> = comments.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests that only comments of the requested topic are returned.
///
/// Expected: Ok with the other topic's comments excluded, empty for unknown topics
#[tokio::test]
async fn excludes_other_topics() -> Result<(), AppError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let topic = factory::create_topic(db).await?;
    let other = factory::create_topic(db).await?;

    factory::create_comment(db, topic.id, user.id).await?;
    factory::create_comment(db, other.id, user.id).await?;

    let repo = CommentRepository::new(db);

    assert_eq!(repo.get_by_topic(topic.id).await?.len(), 1);
    assert!(repo.get_by_topic(9999).await?.is_empty());

    Ok(())
}
