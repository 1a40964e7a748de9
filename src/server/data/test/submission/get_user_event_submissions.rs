use super::*;

/// Tests listing a user's submissions for the current event.
///
/// Verifies that submissions of other users and other events are excluded and that
/// results are ordered oldest first.
///
/// Expected: Ok with the user's two submissions in date order
#[tokio::test]
async fn lists_only_user_event_submissions_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Submission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SubmissionFactory::new(db)
        .user_id("42")
        .event_key(EVENT)
        .date(start() + Duration::hours(2))
        .crayon(7)
        .build()
        .await?;
    SubmissionFactory::new(db)
        .user_id("42")
        .event_key(EVENT)
        .date(start())
        .science(12)
        .build()
        .await?;
    SubmissionFactory::new(db)
        .user_id("42")
        .event_key("hpp24")
        .science(99)
        .build()
        .await?;
    SubmissionFactory::new(db)
        .user_id("7")
        .event_key(EVENT)
        .science(5)
        .build()
        .await?;

    let repo = SubmissionRepository::new(db);
    let submissions = repo.get_user_event_submissions(EVENT, "42").await?;

    assert_eq!(submissions.len(), 2);
    assert_eq!(submissions[0].division, Division::Science);
    assert_eq!(submissions[0].count, 12);
    assert_eq!(submissions[1].division, Division::Crayon);
    assert_eq!(submissions[1].date, start() + Duration::hours(2));

    Ok(())
}

/// Tests statistics rows without event data.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn skips_rows_without_division_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Submission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SubmissionFactory::new(db)
        .user_id("42")
        .event_key(EVENT)
        .kills(500)
        .build()
        .await?;

    let repo = SubmissionRepository::new(db);

    assert!(repo.get_user_event_submissions(EVENT, "42").await?.is_empty());

    Ok(())
}
