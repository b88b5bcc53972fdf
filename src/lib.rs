pub mod decimal;
pub mod engine;
pub mod errors;
pub mod interest;
pub mod selection;
pub mod settings;
pub mod store;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use engine::{OverdueEngine, OverdueSummary};
pub use errors::{LedgerError, Result};
pub use interest::{accrue, days_overdue};
pub use selection::{select_overdue, LedgerStore};
pub use settings::{
    resolve_settings, CompoundingPeriod, OverdueSettings, OverdueSettingsForm, SettingsStore,
};
pub use store::MemoryStore;
pub use types::{EnrichedOverdueEntry, EntryId, EntryStatus, LedgerEntry, TenantId};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
