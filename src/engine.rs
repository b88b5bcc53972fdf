use hourglass_rs::SafeTimeProvider;
use log::debug;

use crate::decimal::Money;
use crate::errors::Result;
use crate::interest::accrue;
use crate::selection::{select_overdue, LedgerStore};
use crate::settings::{resolve_settings, OverdueSettings, OverdueSettingsForm, SettingsStore};
use crate::types::{EnrichedOverdueEntry, EntryId, TenantId};

/// summary line over a tenant's enriched overdue entries
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverdueSummary {
    pub entry_count: usize,
    pub principal: Money,
    pub interest: Money,
    pub total_due: Money,
}

/// facade wiring settings resolution, overdue selection, and the accrual
/// calculator over a time provider.
///
/// Interest is never persisted; every call recomputes from current store
/// state and the provider's current time.
pub struct OverdueEngine<S, L> {
    settings_store: S,
    ledger_store: L,
    time: SafeTimeProvider,
}

impl<S: SettingsStore, L: LedgerStore> OverdueEngine<S, L> {
    pub fn new(settings_store: S, ledger_store: L, time: SafeTimeProvider) -> Self {
        Self {
            settings_store,
            ledger_store,
            time,
        }
    }

    /// a tenant's overdue entries with accrued interest, oldest due first
    pub fn overdue_entries(&self, tenant_id: TenantId) -> Result<Vec<EnrichedOverdueEntry>> {
        let as_of = self.time.now();
        let settings = resolve_settings(&self.settings_store, tenant_id, as_of)?;
        let entries = select_overdue(&self.ledger_store, tenant_id, as_of)?;

        debug!(
            "accruing interest for tenant {} over {} overdue entries as of {}",
            tenant_id,
            entries.len(),
            as_of
        );

        Ok(entries
            .iter()
            .map(|entry| accrue(entry, &settings, as_of))
            .collect())
    }

    /// effective settings for a tenant: stored record or defaults
    pub fn effective_settings(&self, tenant_id: TenantId) -> Result<OverdueSettings> {
        resolve_settings(&self.settings_store, tenant_id, self.time.now())
    }

    /// validate and upsert settings from the percent-based form
    pub fn update_settings(
        &self,
        tenant_id: TenantId,
        form: OverdueSettingsForm,
    ) -> Result<OverdueSettings> {
        let settings = form.into_settings(self.time.now())?;
        self.settings_store
            .upsert_settings(tenant_id, settings.clone())?;
        Ok(settings)
    }

    /// totals across a tenant's enriched overdue entries, for report headers
    pub fn overdue_summary(&self, tenant_id: TenantId) -> Result<OverdueSummary> {
        let enriched = self.overdue_entries(tenant_id)?;

        let mut principal = Money::ZERO;
        let mut interest = Money::ZERO;
        let mut total_due = Money::ZERO;
        for row in &enriched {
            principal += row.entry.amount;
            interest += row.interest;
            total_due += row.total_due;
        }

        Ok(OverdueSummary {
            entry_count: enriched.len(),
            principal,
            interest,
            total_due,
        })
    }

    /// settle an entry; it drops out of accrual on the next read
    pub fn mark_paid(&self, tenant_id: TenantId, id: EntryId) -> Result<()> {
        self.ledger_store.mark_paid(tenant_id, id, self.time.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use crate::errors::LedgerError;
    use crate::settings::CompoundingPeriod;
    use crate::store::MemoryStore;
    use crate::types::{EntryStatus, LedgerEntry};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use hourglass_rs::TimeSource;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use uuid::Uuid;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap()
    }

    fn engine() -> OverdueEngine<Arc<MemoryStore>, Arc<MemoryStore>> {
        let store = Arc::new(MemoryStore::new());
        let time = SafeTimeProvider::new(TimeSource::Test(start()));
        OverdueEngine::new(store.clone(), store, time)
    }

    fn seed(
        engine: &OverdueEngine<Arc<MemoryStore>, Arc<MemoryStore>>,
        tenant: TenantId,
        amount: Money,
        due_days_before: i64,
    ) -> EntryId {
        let due = start() - Duration::days(due_days_before);
        let mut entry = LedgerEntry::new(tenant, "Invoice", amount, due, due);
        entry.status = EntryStatus::Overdue;
        let id = entry.id;
        engine.ledger_store.insert_entry(entry).unwrap();
        id
    }

    #[test]
    fn test_overdue_entries_with_default_settings() {
        let engine = engine();
        let tenant = Uuid::new_v4();

        // 8 days overdue: 1 effective day, raw ~0.41, floored to the 5 fee
        seed(&engine, tenant, Money::from_major(1_000), 8);

        let enriched = engine.overdue_entries(tenant).unwrap();
        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].days_overdue, 8);
        assert_eq!(enriched[0].interest, Money::from_major(5));
        assert_eq!(enriched[0].total_due, Money::from_major(1_005));
    }

    #[test]
    fn test_interest_grows_as_time_advances() {
        let engine = engine();
        let tenant = Uuid::new_v4();
        seed(&engine, tenant, Money::from_major(50_000), 30);

        let before = engine.overdue_entries(tenant).unwrap()[0].interest;

        let control = engine.time.test_control().unwrap();
        control.advance(Duration::days(30));

        let after = engine.overdue_entries(tenant).unwrap()[0].interest;
        assert!(after > before);
    }

    #[test]
    fn test_paid_entry_never_reaches_the_calculator() {
        let engine = engine();
        let tenant = Uuid::new_v4();
        let id = seed(&engine, tenant, Money::from_major(1_000), 60);

        engine.mark_paid(tenant, id).unwrap();

        assert!(engine.overdue_entries(tenant).unwrap().is_empty());
    }

    #[test]
    fn test_mark_paid_unknown_entry() {
        let engine = engine();
        let err = engine.mark_paid(Uuid::new_v4(), Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, LedgerError::EntryNotFound { .. }));
    }

    #[test]
    fn test_effective_settings_defaults_then_stored() {
        let engine = engine();
        let tenant = Uuid::new_v4();

        let defaults = engine.effective_settings(tenant).unwrap();
        assert_eq!(defaults.grace_period_days, 7);

        let form = OverdueSettingsForm {
            grace_period_days: 14,
            annual_interest_rate_percent: dec!(12),
            compounding_period: CompoundingPeriod::Monthly,
            minimum_fee: Money::from_major(10),
        };
        engine.update_settings(tenant, form).unwrap();

        let stored = engine.effective_settings(tenant).unwrap();
        assert_eq!(stored.grace_period_days, 14);
        assert_eq!(stored.annual_interest_rate, Rate::from_decimal(dec!(0.12)));
        assert_eq!(stored.compounding_period, CompoundingPeriod::Monthly);
    }

    #[test]
    fn test_update_settings_rejects_negative_fee() {
        let engine = engine();
        let tenant = Uuid::new_v4();

        let form = OverdueSettingsForm {
            grace_period_days: 7,
            annual_interest_rate_percent: dec!(15),
            compounding_period: CompoundingPeriod::Daily,
            minimum_fee: Money::from_major(-5),
        };

        let err = engine.update_settings(tenant, form).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidConfiguration { .. }));

        // rejected writes must not materialize a record
        assert!(engine
            .settings_store
            .find_settings(tenant)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_summary_totals() {
        let engine = engine();
        let tenant = Uuid::new_v4();

        seed(&engine, tenant, Money::from_major(1_000), 8);
        seed(&engine, tenant, Money::from_major(2_000), 9);
        seed(&engine, tenant, Money::from_major(500), 3); // within grace

        let summary = engine.overdue_summary(tenant).unwrap();
        assert_eq!(summary.entry_count, 3);
        assert_eq!(summary.principal, Money::from_major(3_500));
        // two floored fees, nothing inside the grace period
        assert_eq!(summary.interest, Money::from_major(10));
        assert_eq!(summary.total_due, summary.principal + summary.interest);
    }

    #[test]
    fn test_summary_for_tenant_with_no_entries() {
        let engine = engine();

        let summary = engine.overdue_summary(Uuid::new_v4()).unwrap();
        assert_eq!(summary.entry_count, 0);
        assert_eq!(summary.total_due, Money::ZERO);
    }
}
