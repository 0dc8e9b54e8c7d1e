//! Entry repository: the `PostgreSQL` backed entry store.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{error, info};

use livro_core::ledger::{Entry, EntryFilter, EntryOrder, EntryStore, NewEntry, StoreError};
use livro_shared::types::{CompanyId, EntryId};

use crate::entities::entries;

/// Entry repository over the `entries` table.
#[derive(Debug, Clone)]
pub struct EntryRepository {
    db: DatabaseConnection,
}

impl EntryRepository {
    /// Creates a new entry repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_domain(model: entries::Model) -> Entry {
        Entry {
            id: EntryId::from_uuid(model.id),
            company_id: CompanyId::from_uuid(model.company_id),
            account: model.account,
            debit: model.debit,
            credit: model.credit,
            description: model.description,
            month: model.month,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[async_trait]
impl EntryStore for EntryRepository {
    async fn append(&self, entry: NewEntry) -> Result<Entry, StoreError> {
        let entry = entry.stamp(Utc::now())?;

        let model = entries::ActiveModel {
            id: Set(entry.id.into_inner()),
            company_id: Set(entry.company_id.into_inner()),
            account: Set(entry.account.clone()),
            debit: Set(entry.debit),
            credit: Set(entry.credit),
            description: Set(entry.description.clone()),
            month: Set(entry.month.clone()),
            created_at: Set(entry.created_at.into()),
        };

        let stored = model.insert(&self.db).await.map_err(|e| {
            error!(error = %e, company_id = %entry.company_id, "Failed to insert entry");
            StoreError::Persistence(e.to_string())
        })?;

        info!(entry_id = %entry.id, company_id = %entry.company_id, "Entry recorded");
        Ok(Self::to_domain(stored))
    }

    async fn query(
        &self,
        company_id: CompanyId,
        filter: &EntryFilter,
    ) -> Result<Vec<Entry>, StoreError> {
        let mut query =
            entries::Entity::find().filter(entries::Column::CompanyId.eq(company_id.into_inner()));

        if let Some(account) = &filter.account {
            query = query.filter(entries::Column::Account.eq(account.as_str()));
        }
        if let Some(month) = &filter.month {
            query = query.filter(entries::Column::Month.eq(month.as_str()));
        }

        query = match filter.order {
            EntryOrder::NewestFirst => query
                .order_by_desc(entries::Column::CreatedAt)
                .order_by_desc(entries::Column::Id),
            EntryOrder::OldestFirst => query
                .order_by_asc(entries::Column::CreatedAt)
                .order_by_asc(entries::Column::Id),
        };

        let models = query.all(&self.db).await.map_err(|e| {
            error!(error = %e, %company_id, "Failed to query entries");
            StoreError::Query(e.to_string())
        })?;

        Ok(models.into_iter().map(Self::to_domain).collect())
    }
}
