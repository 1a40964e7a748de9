use super::*;

/// Tests reading an existing highscore row.
///
/// Expected: Ok(Some) with the stored values
#[tokio::test]
async fn finds_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Highscore).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    HighscoreFactory::new(db).user_id("42").level(99).build().await?;

    let repo = HighscoreRepository::new(db);
    let highscore = repo.find_by_user_id("42").await?.unwrap();

    assert_eq!(highscore.statistics.level, Some(99));

    Ok(())
}

/// Tests a user without a highscore row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Highscore).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HighscoreRepository::new(db);

    assert!(repo.find_by_user_id("42").await?.is_none());

    Ok(())
}
