use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_submission_table::Submission;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Division counters for community events, one nullable column per division.
const DIVISION_COLUMNS: [EventSubmission; 5] = [
    EventSubmission::EventScienceCount,
    EventSubmission::EventBaldzerkersCount,
    EventSubmission::EventDiaperCount,
    EventSubmission::EventCrayonCount,
    EventSubmission::EventSnackCount,
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite only accepts one ALTER per statement
        manager
            .alter_table(
                Table::alter()
                    .table(Submission::Table)
                    .add_column(string_null(EventSubmission::EventKey))
                    .to_owned(),
            )
            .await?;

        for column in DIVISION_COLUMNS {
            manager
                .alter_table(
                    Table::alter()
                        .table(Submission::Table)
                        .add_column(integer_null(column))
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_index(
                Index::create()
                    .name("idx_submission_event_key")
                    .table(Submission::Table)
                    .col(EventSubmission::EventKey)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_submission_event_key")
                    .table(Submission::Table)
                    .to_owned(),
            )
            .await?;

        for column in DIVISION_COLUMNS {
            manager
                .alter_table(
                    Table::alter()
                        .table(Submission::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .alter_table(
                Table::alter()
                    .table(Submission::Table)
                    .drop_column(EventSubmission::EventKey)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
pub enum EventSubmission {
    EventKey,
    EventScienceCount,
    EventBaldzerkersCount,
    EventDiaperCount,
    EventCrayonCount,
    EventSnackCount,
}
