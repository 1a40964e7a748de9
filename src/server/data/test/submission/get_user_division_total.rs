use super::*;

/// Tests summing a user's counts for one division.
///
/// Expected: Ok(25) from two baldzerkers submissions, ignoring other divisions
#[tokio::test]
async fn sums_user_division_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Submission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for count in [10, 15] {
        SubmissionFactory::new(db)
            .user_id("42")
            .event_key(EVENT)
            .baldzerkers(count)
            .build()
            .await?;
    }
    SubmissionFactory::new(db)
        .user_id("42")
        .event_key(EVENT)
        .diaper(100)
        .build()
        .await?;

    let repo = SubmissionRepository::new(db);

    assert_eq!(
        repo.get_user_division_total(EVENT, "42", Division::Baldzerkers).await?,
        25
    );

    Ok(())
}

/// Tests the total of a user without submissions.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_submissions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Submission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubmissionRepository::new(db);

    assert_eq!(repo.get_user_division_total(EVENT, "42", Division::Snack).await?, 0);

    Ok(())
}
