use super::*;

/// Tests aggregating an event across users.
///
/// Expected: Ok with per-division sums and the number of event rows
#[tokio::test]
async fn aggregates_event_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Submission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SubmissionFactory::new(db).event_key(EVENT).science(10).build().await?;
    SubmissionFactory::new(db).event_key(EVENT).science(5).build().await?;
    SubmissionFactory::new(db).event_key(EVENT).snack(30).build().await?;
    SubmissionFactory::new(db).event_key("hpp24").crayon(1000).build().await?;

    let repo = SubmissionRepository::new(db);
    let totals = repo.get_event_totals(EVENT).await?;

    assert_eq!(totals.submissions, 3);
    assert_eq!(totals.total(), 45);
    assert_eq!(totals.divisions.len(), 5);
    assert_eq!(totals.divisions[0].division, Division::Science);
    assert_eq!(totals.divisions[0].total, 15);
    assert_eq!(totals.divisions[3].total, 0);
    assert_eq!(totals.ranking()[0].division, Division::Snack);

    Ok(())
}

/// Tests an event without submissions.
///
/// Expected: Ok with zero totals for all five divisions
#[tokio::test]
async fn returns_zeros_for_empty_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Submission).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubmissionRepository::new(db);
    let totals = repo.get_event_totals(EVENT).await?;

    assert_eq!(totals.submissions, 0);
    assert_eq!(totals.total(), 0);
    assert_eq!(totals.divisions.len(), 5);
    assert_eq!(totals.average(), 0);

    Ok(())
}
