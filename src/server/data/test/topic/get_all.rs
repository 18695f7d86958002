use super::*;

/// Tests that topics are listed newest first.
///
/// Expected: Ok with later topics before earlier ones
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_topic(db).await?;
    let second = factory::create_topic(db).await?;

    let topics = TopicRepository::new(db).get_all().await?;

    let ids: Vec<_> = topics.into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
