/// quick start - minimal example to get started
use overdue_interest_rs::{
    LedgerStore, MemoryStore, Money, OverdueEngine, SafeTimeProvider, TimeSource,
};
use overdue_interest_rs::{EntryStatus, LedgerEntry, Uuid};
use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
    let time = SafeTimeProvider::new(TimeSource::Test(now));

    let store = Arc::new(MemoryStore::new());
    let engine = OverdueEngine::new(store.clone(), store.clone(), time);

    // seed one tenant with a 1,000 invoice that went overdue 8 days ago
    let tenant = Uuid::new_v4();
    let due = now - Duration::days(8);
    let mut entry = LedgerEntry::new(tenant, "Invoice #42", Money::from_major(1_000), due, due);
    entry.status = EntryStatus::Overdue;
    store.insert_entry(entry)?;

    // default settings: 7-day grace, 15% annual, daily compounding, 5 minimum fee
    for row in engine.overdue_entries(tenant)? {
        println!(
            "{}: {} days overdue, interest {}, total due {}",
            row.entry.description,
            row.days_overdue,
            row.interest.round_dp(2),
            row.total_due.round_dp(2),
        );
    }

    Ok(())
}
