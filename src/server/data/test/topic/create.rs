use super::*;

/// Tests creating a topic with an author.
///
/// Expected: Ok with topic retrievable by id
#[tokio::test]
async fn creates_topic() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = TopicRepository::new(db);

    let topic = repo
        .create(CreateTopicParam {
            title: "Ulubione kryminały".to_string(),
            author_id: Some(user.id),
        })
        .await?;

    assert_eq!(topic.title, "Ulubione kryminały");
    assert_eq!(topic.author_id, Some(user.id));
    assert_eq!(repo.find_by_id(topic.id).await?, Some(topic));

    Ok(())
}
