use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::settings::CompoundingPeriod;

/// calculate (1 + rate)^periods using iteration
pub fn compound_factor(rate: Decimal, periods: u32) -> Decimal {
    let mut factor = Decimal::ONE;
    let base = Decimal::ONE + rate;
    for _ in 0..periods {
        factor *= base;
    }
    factor
}

/// raw compounded interest on `amount` for `effective_days` past the grace
/// period, before the minimum-fee floor.
///
/// Weekly and monthly regimes compound whole periods and apply the remainder
/// days as simple daily interest on top; months are fixed at 30 days. Both
/// are long-standing billing behavior and must not be "corrected" to pure
/// compounding or calendar months.
pub fn raw_interest(
    amount: Money,
    annual_rate: Rate,
    period: CompoundingPeriod,
    effective_days: u32,
) -> Money {
    let daily_rate = annual_rate.daily_rate().as_decimal();

    let factor = match period {
        CompoundingPeriod::Daily => compound_factor(daily_rate, effective_days),
        CompoundingPeriod::Weekly | CompoundingPeriod::Monthly => {
            let days_per_period = period.days_per_period();
            let whole_periods = effective_days / days_per_period;
            let remainder_days = effective_days % days_per_period;
            let period_rate = daily_rate * Decimal::from(days_per_period);

            compound_factor(period_rate, whole_periods)
                * (Decimal::ONE + daily_rate * Decimal::from(remainder_days))
        }
    };

    Money::from_decimal(amount.as_decimal() * (factor - Decimal::ONE))
}
