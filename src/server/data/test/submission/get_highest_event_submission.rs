use super::*;

/// Tests finding the largest count across all divisions.
///
/// Expected: Ok(Some) with the crayon submission of user 7
#[tokio::test]
async fn finds_highest_across_divisions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Submission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SubmissionFactory::new(db).user_id("1").event_key(EVENT).science(40).build().await?;
    SubmissionFactory::new(db).user_id("7").event_key(EVENT).crayon(85).build().await?;
    SubmissionFactory::new(db).user_id("9").event_key(EVENT).snack(60).build().await?;
    SubmissionFactory::new(db).user_id("3").event_key("hpp24").snack(900).build().await?;

    let repo = SubmissionRepository::new(db);
    let highest = repo.get_highest_event_submission(EVENT).await?.unwrap();

    assert_eq!(highest.user_id, "7");
    assert_eq!(highest.division, Division::Crayon);
    assert_eq!(highest.count, 85);

    Ok(())
}

/// Tests tie breaking between equal counts.
///
/// Expected: Ok(Some) with the earlier submission
#[tokio::test]
async fn prefers_earliest_on_tie() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Submission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SubmissionFactory::new(db)
        .user_id("late")
        .event_key(EVENT)
        .date(start() + Duration::minutes(5))
        .science(50)
        .build()
        .await?;
    SubmissionFactory::new(db)
        .user_id("early")
        .event_key(EVENT)
        .date(start())
        .diaper(50)
        .build()
        .await?;

    let repo = SubmissionRepository::new(db);
    let highest = repo.get_highest_event_submission(EVENT).await?.unwrap();

    assert_eq!(highest.user_id, "early");

    Ok(())
}

/// Tests an event without submissions.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_empty_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Submission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubmissionRepository::new(db);

    assert!(repo.get_highest_event_submission(EVENT).await?.is_none());

    Ok(())
}
