//! Database migration runner for Livro.
//!
//! Usage:
//!   livro-migrator up      - Run all pending migrations
//!   livro-migrator down    - Rollback last migration
//!   livro-migrator status  - Show migration status
//!   livro-migrator fresh   - Drop all tables and re-run migrations
//!
//! The connection string is read from `DATABASE_URL`.

use livro_db::migration::Migrator;
use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // The CLI installs its own tracing subscriber.
    cli::run_cli(Migrator).await;
}
