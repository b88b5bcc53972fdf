use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::types::TenantId;

/// compounding cadence for overdue interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl CompoundingPeriod {
    /// days per compounding period; months are fixed at 30 days,
    /// calendar months are not used
    pub fn days_per_period(&self) -> u32 {
        match self {
            CompoundingPeriod::Daily => 1,
            CompoundingPeriod::Weekly => 7,
            CompoundingPeriod::Monthly => 30,
        }
    }
}

/// per-tenant overdue interest settings; at most one active record per tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverdueSettings {
    /// days after due date before interest starts
    pub grace_period_days: u32,
    /// nominal annual rate as a fraction (0.15 = 15%)
    pub annual_interest_rate: Rate,
    pub compounding_period: CompoundingPeriod,
    /// floor applied to computed interest once interest applies at all
    pub minimum_fee: Money,
    pub updated_at: DateTime<Utc>,
}

impl OverdueSettings {
    /// documented defaults, used when a tenant has no stored record
    pub fn defaults(now: DateTime<Utc>) -> Self {
        Self {
            grace_period_days: 7,
            annual_interest_rate: Rate::from_decimal(dec!(0.15)),
            compounding_period: CompoundingPeriod::Daily,
            minimum_fee: Money::from_major(5),
            updated_at: now,
        }
    }

    /// write-boundary validation; the calculator itself never validates
    pub fn validate(&self) -> Result<()> {
        if self.annual_interest_rate.as_decimal() < Decimal::ZERO {
            return Err(LedgerError::InvalidConfiguration {
                message: format!(
                    "annual interest rate must not be negative: {}",
                    self.annual_interest_rate
                ),
            });
        }
        if self.minimum_fee.is_negative() {
            return Err(LedgerError::InvalidConfiguration {
                message: format!("minimum fee must not be negative: {}", self.minimum_fee),
            });
        }
        // grace_period_days is unsigned, negatives are unrepresentable
        Ok(())
    }
}

/// settings as edited on the admin form: the rate travels as a percentage
/// (15 means 15%) and is divided by 100 on save; any settings-editing
/// surface must keep this unit boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverdueSettingsForm {
    pub grace_period_days: u32,
    pub annual_interest_rate_percent: Decimal,
    pub compounding_period: CompoundingPeriod,
    pub minimum_fee: Money,
}

impl OverdueSettingsForm {
    /// present stored settings for editing, rate multiplied by 100
    pub fn from_settings(settings: &OverdueSettings) -> Self {
        Self {
            grace_period_days: settings.grace_period_days,
            annual_interest_rate_percent: settings.annual_interest_rate.as_percentage(),
            compounding_period: settings.compounding_period,
            minimum_fee: settings.minimum_fee,
        }
    }

    /// convert back to stored settings, rate divided by 100, validated
    pub fn into_settings(self, now: DateTime<Utc>) -> Result<OverdueSettings> {
        let settings = OverdueSettings {
            grace_period_days: self.grace_period_days,
            annual_interest_rate: Rate::from_percentage(self.annual_interest_rate_percent),
            compounding_period: self.compounding_period,
            minimum_fee: self.minimum_fee,
            updated_at: now,
        };
        settings.validate()?;
        Ok(settings)
    }
}

/// tenant-scoped settings persistence
pub trait SettingsStore {
    fn find_settings(&self, tenant_id: TenantId) -> Result<Option<OverdueSettings>>;

    /// upsert keyed by tenant; records are never deleted
    fn upsert_settings(&self, tenant_id: TenantId, settings: OverdueSettings) -> Result<()>;
}

impl<T: SettingsStore + ?Sized> SettingsStore for std::sync::Arc<T> {
    fn find_settings(&self, tenant_id: TenantId) -> Result<Option<OverdueSettings>> {
        (**self).find_settings(tenant_id)
    }

    fn upsert_settings(&self, tenant_id: TenantId, settings: OverdueSettings) -> Result<()> {
        (**self).upsert_settings(tenant_id, settings)
    }
}

/// effective settings for a tenant: the stored record, or the defaults.
/// Defaults are not persisted here; they only materialize on an explicit update.
pub fn resolve_settings<S: SettingsStore>(
    store: &S,
    tenant_id: TenantId,
    now: DateTime<Utc>,
) -> Result<OverdueSettings> {
    match store.find_settings(tenant_id)? {
        Some(settings) => Ok(settings),
        None => Ok(OverdueSettings::defaults(now)),
    }
}
