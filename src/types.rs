use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;

/// unique identifier for a tenant (company account)
pub type TenantId = Uuid;

/// unique identifier for a ledger entry
pub type EntryId = Uuid;

/// ledger entry payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    /// settled in full, excluded from accrual regardless of date
    Paid,
    /// awaiting payment, not yet past due
    Pending,
    /// past due date
    Overdue,
}

/// a receivable ledger entry, scoped to one tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: EntryId,
    pub tenant_id: TenantId,
    pub description: String,
    /// original principal owed
    pub amount: Money,
    /// date after which the grace period begins counting
    pub due_date: DateTime<Utc>,
    pub status: EntryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn new(
        tenant_id: TenantId,
        description: impl Into<String>,
        amount: Money,
        due_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            description: description.into(),
            amount,
            due_date,
            status: EntryStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

/// ledger entry enriched with accrued interest; derived on read, never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedOverdueEntry {
    pub entry: LedgerEntry,
    /// whole days past the due date, clamped at zero
    pub days_overdue: u32,
    pub interest: Money,
    /// amount + interest
    pub total_due: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    #[test]
    fn test_new_entry_defaults_to_pending() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let entry = LedgerEntry::new(
            Uuid::new_v4(),
            "Invoice #42",
            Money::from_major(1_000),
            now,
            now,
        );

        assert_eq!(entry.status, EntryStatus::Pending);
        assert_eq!(entry.created_at, entry.updated_at);
    }

    #[test]
    fn test_entry_json_round_trip() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let entry = LedgerEntry::new(
            Uuid::new_v4(),
            "Invoice #42",
            Money::from_str("1500.50").unwrap(),
            now,
            now,
        );

        let json = serde_json::to_string(&entry).unwrap();
        let back: LedgerEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
