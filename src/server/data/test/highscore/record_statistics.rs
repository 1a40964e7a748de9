use super::*;

/// Tests the first statistics update of a user.
///
/// Verifies that the update is appended to the submission log and a highscore row is
/// created with only the provided values.
///
/// Expected: Ok with one submission row and one unverified highscore row
#[tokio::test]
async fn creates_log_entry_and_highscore() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_statistics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HighscoreRepository::new(db);
    let highscore = repo
        .record_statistics(param(
            "42",
            Statistics {
                name: Some("Dad".to_string()),
                kills: Some(1200),
                ..Default::default()
            },
        ))
        .await?;

    assert_eq!(highscore.user_id, "42");
    assert!(!highscore.verified);
    assert_eq!(highscore.statistics.kills, Some(1200));
    assert_eq!(highscore.statistics.level, None);

    let log = Submission::find().all(db).await?;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].kills, Some(1200));
    assert_eq!(log[0].event_key, None);

    Ok(())
}

/// Tests merging a later partial update into an existing highscore.
///
/// Verifies that fields not provided keep their previous values and the verified
/// flag survives the update.
///
/// Expected: Ok with kills replaced, level and name kept, verified still true
#[tokio::test]
async fn merges_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_statistics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    HighscoreFactory::new(db)
        .user_id("42")
        .name("Dad")
        .level(80)
        .kills(100)
        .verified(true)
        .build()
        .await?;

    let repo = HighscoreRepository::new(db);
    let highscore = repo
        .record_statistics(param(
            "42",
            Statistics {
                kills: Some(2500),
                ..Default::default()
            },
        ))
        .await?;

    assert_eq!(highscore.statistics.kills, Some(2500));
    assert_eq!(highscore.statistics.level, Some(80));
    assert_eq!(highscore.statistics.name.as_deref(), Some("Dad"));
    assert!(highscore.verified);
    assert_eq!(Highscore::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests atomicity when the highscore write fails.
///
/// The highscore table is missing, so the upsert fails after the log insert.
///
/// Expected: Err and no submission row left behind
#[tokio::test]
async fn rolls_back_log_entry_on_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Submission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HighscoreRepository::new(db);
    let result = repo
        .record_statistics(param(
            "42",
            Statistics {
                deaths: Some(3),
                ..Default::default()
            },
        ))
        .await;

    assert!(result.is_err());
    assert!(Submission::find().all(db).await?.is_empty());

    Ok(())
}
