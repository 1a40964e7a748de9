pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_submission_table;
mod m20250301_000002_create_highscore_table;
mod m20250914_000003_add_event_division_columns;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_submission_table::Migration),
            Box::new(m20250301_000002_create_highscore_table::Migration),
            Box::new(m20250914_000003_add_event_division_columns::Migration),
        ]
    }
}
