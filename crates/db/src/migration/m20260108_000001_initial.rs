//! Initial database migration.
//!
//! Creates the companies and entries tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(COMPANIES_SQL).await?;
        db.execute_unprepared(ENTRIES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

const COMPANIES_SQL: &str = r"
CREATE TABLE companies (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    cnpj VARCHAR(18) NOT NULL UNIQUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

// Amounts are nullable: a missing or non-numeric amount is kept as NULL and
// counts as zero when totals are computed.
const ENTRIES_SQL: &str = r"
CREATE TABLE entries (
    id UUID PRIMARY KEY,
    company_id UUID NOT NULL REFERENCES companies(id) ON DELETE CASCADE,
    account VARCHAR(255) NOT NULL,
    debit NUMERIC(19, 4),
    credit NUMERIC(19, 4),
    description TEXT NOT NULL DEFAULT '',
    month VARCHAR(20) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_entries_company_created ON entries(company_id, created_at DESC);
CREATE INDEX idx_entries_company_account ON entries(company_id, account);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS entries CASCADE;
DROP TABLE IF EXISTS companies CASCADE;
";
