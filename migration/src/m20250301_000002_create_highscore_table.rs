use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Highscore::Table)
                    .if_not_exists()
                    .col(string(Highscore::UserId).primary_key())
                    .col(string_null(Highscore::Name))
                    .col(timestamp_with_time_zone(Highscore::Date))
                    .col(boolean(Highscore::Verified).default(false))
                    .col(integer_null(Highscore::Level))
                    .col(date_null(Highscore::EnlistDate))
                    .col(integer_null(Highscore::MissionsWon))
                    .col(integer_null(Highscore::Kills))
                    .col(integer_null(Highscore::Deaths))
                    .col(integer_null(Highscore::FriendlyKills))
                    .col(integer_null(Highscore::SamplesCollected))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Highscore::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Highscore {
    Table,
    UserId,
    Name,
    Date,
    Verified,
    Level,
    EnlistDate,
    MissionsWon,
    Kills,
    Deaths,
    FriendlyKills,
    SamplesCollected,
}
