//! Aggregate report models

/// Sums of cumulative totals across every region in the map dataset
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AggregateTotals {
    pub confirmed: i64,
    pub deaths: i64,
    pub recovered: i64,
}
