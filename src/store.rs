use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::errors::{LedgerError, Result};
use crate::selection::LedgerStore;
use crate::settings::{OverdueSettings, SettingsStore};
use crate::types::{EntryId, EntryStatus, LedgerEntry, TenantId};

/// in-memory store backing both the ledger and settings traits.
///
/// Settings are upserted keyed by tenant and never deleted; entries are
/// tenant-scoped. Useful for tests and as the reference semantics a real
/// database-backed store must match.
#[derive(Default)]
pub struct MemoryStore {
    settings: Mutex<HashMap<TenantId, OverdueSettings>>,
    entries: Mutex<Vec<LedgerEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn find_settings(&self, tenant_id: TenantId) -> Result<Option<OverdueSettings>> {
        let settings = self.settings.lock().map_err(poisoned)?;
        Ok(settings.get(&tenant_id).cloned())
    }

    fn upsert_settings(&self, tenant_id: TenantId, record: OverdueSettings) -> Result<()> {
        let mut settings = self.settings.lock().map_err(poisoned)?;
        settings.insert(tenant_id, record);
        Ok(())
    }
}

impl LedgerStore for MemoryStore {
    fn list_entries(&self, tenant_id: TenantId) -> Result<Vec<LedgerEntry>> {
        let entries = self.entries.lock().map_err(poisoned)?;
        Ok(entries
            .iter()
            .filter(|entry| entry.tenant_id == tenant_id)
            .cloned()
            .collect())
    }

    fn insert_entry(&self, entry: LedgerEntry) -> Result<()> {
        let mut entries = self.entries.lock().map_err(poisoned)?;
        entries.push(entry);
        Ok(())
    }

    fn mark_paid(&self, tenant_id: TenantId, id: EntryId, now: DateTime<Utc>) -> Result<()> {
        let mut entries = self.entries.lock().map_err(poisoned)?;
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == id && entry.tenant_id == tenant_id)
            .ok_or(LedgerError::EntryNotFound { id })?;

        entry.status = EntryStatus::Paid;
        entry.updated_at = now;
        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> LedgerError {
    LedgerError::StoreUnavailable {
        message: "store lock poisoned".to_string(),
    }
}
