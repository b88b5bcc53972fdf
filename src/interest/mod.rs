pub mod accrual;
pub mod compound;

pub use accrual::{accrue, days_overdue};
pub use compound::{compound_factor, raw_interest};
