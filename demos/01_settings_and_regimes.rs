/// settings and compounding regimes - per-tenant configuration with time control
use overdue_interest_rs::{
    CompoundingPeriod, LedgerStore, MemoryStore, Money, OverdueEngine, OverdueSettingsForm,
    SafeTimeProvider, TimeSource,
};
use overdue_interest_rs::{EntryStatus, LedgerEntry, Uuid};
use chrono::{Duration, TimeZone, Utc};
use rust_decimal_macros::dec;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== settings and regimes example ===\n");

    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let time = SafeTimeProvider::new(TimeSource::Test(start));
    let controller = time.test_control().unwrap();

    let store = Arc::new(MemoryStore::new());
    let engine = OverdueEngine::new(store.clone(), store.clone(), time);

    let tenant = Uuid::new_v4();

    // switch the tenant to monthly compounding at 12% with a 3-day grace;
    // the form carries the rate as a percentage and divides by 100 on save
    engine.update_settings(
        tenant,
        OverdueSettingsForm {
            grace_period_days: 3,
            annual_interest_rate_percent: dec!(12),
            compounding_period: CompoundingPeriod::Monthly,
            minimum_fee: Money::from_major(10),
        },
    )?;

    let settings = engine.effective_settings(tenant)?;
    println!("effective rate: {}", settings.annual_interest_rate);

    // a 25,000 invoice due on day one
    let mut entry = LedgerEntry::new(tenant, "Invoice #7", Money::from_major(25_000), start, start);
    entry.status = EntryStatus::Pending;
    let id = entry.id;
    store.insert_entry(entry)?;

    // watch interest accrue as time advances; nothing is persisted,
    // each read recomputes from scratch
    for step in 1..=3 {
        controller.advance(Duration::days(45));
        let summary = engine.overdue_summary(tenant)?;
        println!(
            "after {} days: interest {}, total due {}",
            step * 45,
            summary.interest.round_dp(2),
            summary.total_due.round_dp(2),
        );
    }

    // settle the invoice; it drops out of the overdue view immediately
    engine.mark_paid(tenant, id)?;
    let summary = engine.overdue_summary(tenant)?;
    println!("after payment: {} overdue entries", summary.entry_count);

    Ok(())
}
