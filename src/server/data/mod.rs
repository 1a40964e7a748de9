//! Database repository layer for the statistics store.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! command layer never touches entities directly.

pub mod highscore;
pub mod submission;

#[cfg(test)]
mod test;
