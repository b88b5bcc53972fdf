use chrono::{DateTime, Utc};

use crate::decimal::Money;
use crate::interest::compound::raw_interest;
use crate::settings::OverdueSettings;
use crate::types::{EnrichedOverdueEntry, LedgerEntry};

/// whole days between due date and the as-of date, clamped at zero
pub fn days_overdue(due_date: DateTime<Utc>, as_of: DateTime<Utc>) -> u32 {
    (as_of - due_date).num_days().max(0) as u32
}

/// accrue overdue interest on a single entry.
///
/// Pure and total: no store access, no error conditions, identical inputs
/// always produce identical outputs. Callers normally pass entries already
/// known to be overdue, but dates on or before the due date are handled and
/// yield zero interest.
///
/// Within the grace period no minimum fee applies; the fee is a penalty for
/// being effectively overdue, not for being overdue at all. Past the grace
/// period the computed interest is floored at `settings.minimum_fee`.
pub fn accrue(
    entry: &LedgerEntry,
    settings: &OverdueSettings,
    as_of: DateTime<Utc>,
) -> EnrichedOverdueEntry {
    let days_overdue = days_overdue(entry.due_date, as_of);

    if days_overdue <= settings.grace_period_days {
        return EnrichedOverdueEntry {
            entry: entry.clone(),
            days_overdue,
            interest: Money::ZERO,
            total_due: entry.amount,
        };
    }

    let effective_days = days_overdue - settings.grace_period_days;
    let interest = raw_interest(
        entry.amount,
        settings.annual_interest_rate,
        settings.compounding_period,
        effective_days,
    )
    .max(settings.minimum_fee);

    EnrichedOverdueEntry {
        entry: entry.clone(),
        days_overdue,
        interest,
        total_due: entry.amount + interest,
    }
}
