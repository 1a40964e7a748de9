use super::*;

/// Tests ranking direction per field.
///
/// Verifies that numeric fields take the largest value while the enlist date takes
/// the earliest, and fields without data are skipped.
///
/// Expected: Ok with level, enlist date, missions won and kills entries only
#[tokio::test]
async fn picks_best_value_per_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Highscore).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    HighscoreFactory::new(db)
        .user_id("1")
        .name("Veteran")
        .level(150)
        .enlist_date(NaiveDate::from_ymd_opt(2024, 2, 8).unwrap())
        .kills(100)
        .build()
        .await?;
    HighscoreFactory::new(db)
        .user_id("2")
        .without_name()
        .level(40)
        .enlist_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        .kills(9000)
        .missions_won(12)
        .build()
        .await?;

    let repo = HighscoreRepository::new(db);
    let entries = repo.get_best_per_field().await?;

    let fields: Vec<_> = entries.iter().map(|entry| entry.field).collect();
    assert_eq!(
        fields,
        vec![
            StatField::Level,
            StatField::EnlistDate,
            StatField::MissionsWon,
            StatField::Kills
        ]
    );

    assert_eq!(entries[0].user_id, "1");
    assert_eq!(entries[0].value, StatValue::Int(150));
    assert_eq!(entries[1].user_id, "1");
    assert_eq!(entries[3].user_id, "2");
    assert_eq!(entries[3].name, None);
    assert_eq!(entries[3].value, StatValue::Int(9000));

    Ok(())
}

/// Tests an empty highscore table.
///
/// Expected: Ok with no entries
#[tokio::test]
async fn returns_empty_without_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Highscore).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HighscoreRepository::new(db);

    assert!(repo.get_best_per_field().await?.is_empty());

    Ok(())
}
