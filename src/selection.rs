use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::types::{EntryId, EntryStatus, LedgerEntry, TenantId};

/// tenant-scoped ledger persistence
pub trait LedgerStore {
    /// list every entry belonging to the tenant, in store order
    fn list_entries(&self, tenant_id: TenantId) -> Result<Vec<LedgerEntry>>;

    fn insert_entry(&self, entry: LedgerEntry) -> Result<()>;

    /// set status to Paid and refresh the updated timestamp
    fn mark_paid(&self, tenant_id: TenantId, id: EntryId, now: DateTime<Utc>) -> Result<()>;
}

impl<T: LedgerStore + ?Sized> LedgerStore for std::sync::Arc<T> {
    fn list_entries(&self, tenant_id: TenantId) -> Result<Vec<LedgerEntry>> {
        (**self).list_entries(tenant_id)
    }

    fn insert_entry(&self, entry: LedgerEntry) -> Result<()> {
        (**self).insert_entry(entry)
    }

    fn mark_paid(&self, tenant_id: TenantId, id: EntryId, now: DateTime<Utc>) -> Result<()> {
        (**self).mark_paid(tenant_id, id, now)
    }
}

/// a tenant's entries that are past due and not paid, oldest due date first.
///
/// Materialized fresh from the store on every call; results always reflect
/// current store state. The ascending order is a display convention (the
/// earliest overdue entry surfaces first) and is part of the contract.
pub fn select_overdue<L: LedgerStore>(
    store: &L,
    tenant_id: TenantId,
    as_of: DateTime<Utc>,
) -> Result<Vec<LedgerEntry>> {
    let mut entries: Vec<LedgerEntry> = store
        .list_entries(tenant_id)?
        .into_iter()
        .filter(|entry| entry.due_date < as_of && entry.status != EntryStatus::Paid)
        .collect();

    entries.sort_by_key(|entry| entry.due_date);
    Ok(entries)
}
