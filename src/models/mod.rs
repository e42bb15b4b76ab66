//! Data models for the region catalog and reports

pub mod region;
pub mod totals;

pub use region::Region;
pub use totals::AggregateTotals;
