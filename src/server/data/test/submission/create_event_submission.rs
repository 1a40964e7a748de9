use super::*;

/// Tests logging a division count.
///
/// Verifies that exactly the chosen division column is set and the event key and
/// user are stored.
///
/// Expected: Ok with one stored row carrying only the diaper count
#[tokio::test]
async fn stores_single_division_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Submission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubmissionRepository::new(db);
    let submission = repo
        .create_event_submission(CreateEventSubmissionParam {
            user_id: "42".to_string(),
            name: Some("Dad".to_string()),
            event_key: EVENT.to_string(),
            division: Division::Diaper,
            count: 40,
            date: start(),
        })
        .await?;

    assert_eq!(submission.division, Division::Diaper);
    assert_eq!(submission.count, 40);

    let rows = Submission::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, "42");
    assert_eq!(rows[0].event_key.as_deref(), Some(EVENT));
    assert_eq!(rows[0].event_diaper_count, Some(40));
    assert_eq!(rows[0].event_science_count, None);
    assert_eq!(rows[0].kills, None);

    Ok(())
}

/// Tests that submissions are appended, never merged.
///
/// Expected: Ok with two separate rows for the same user and division
#[tokio::test]
async fn appends_repeated_submissions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Submission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubmissionRepository::new(db);
    for count in [10, 15] {
        repo.create_event_submission(CreateEventSubmissionParam {
            user_id: "42".to_string(),
            name: None,
            event_key: EVENT.to_string(),
            division: Division::Snack,
            count,
            date: start(),
        })
        .await?;
    }

    assert_eq!(Submission::find().all(db).await?.len(), 2);

    Ok(())
}
