use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Submission::Table)
                    .if_not_exists()
                    .col(pk_auto(Submission::Id))
                    .col(string(Submission::UserId))
                    .col(string_null(Submission::Name))
                    .col(timestamp_with_time_zone(Submission::Date))
                    .col(integer_null(Submission::Level))
                    .col(date_null(Submission::EnlistDate))
                    .col(integer_null(Submission::MissionsWon))
                    .col(integer_null(Submission::Kills))
                    .col(integer_null(Submission::Deaths))
                    .col(integer_null(Submission::FriendlyKills))
                    .col(integer_null(Submission::SamplesCollected))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_submission_user_id")
                    .table(Submission::Table)
                    .col(Submission::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Submission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Submission {
    Table,
    Id,
    UserId,
    Name,
    Date,
    Level,
    EnlistDate,
    MissionsWon,
    Kills,
    Deaths,
    FriendlyKills,
    SamplesCollected,
}
