//! Summary statistics over flow record collections.

use crate::core::model::FlowRecord;

/// Aggregate numbers behind the dashboard's stat strip.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SummaryStats {
    pub total_flows: usize,
    pub total_initiated: u64,
    pub total_completed: u64,
    /// Mean duration over records that actually carry one; zero otherwise.
    pub avg_duration_hours: f64,
}

/// Totals and average duration for a record collection.
///
/// The average only counts records with a strictly positive duration (in
/// both numerator and denominator), so templates without timing data don't
/// drag the mean toward zero.
pub fn summarize(records: &[FlowRecord]) -> SummaryStats {
    let total_initiated: f64 = records.iter().map(|record| record.initiated).sum();
    let total_completed: f64 = records.iter().map(|record| record.completed).sum();

    let durations: Vec<f64> = records
        .iter()
        .map(|record| record.avg_duration_hours)
        .filter(|hours| *hours > 0.0)
        .collect();
    let avg_duration_hours = if durations.is_empty() {
        0.0
    } else {
        durations.iter().sum::<f64>() / durations.len() as f64
    };

    SummaryStats {
        total_flows: records.len(),
        total_initiated: total_initiated.round() as u64,
        total_completed: total_completed.round() as u64,
        avg_duration_hours,
    }
}

/// Percentage of `value` within `all_values`; zero when the total is not
/// positive.
pub fn share_of_total(value: f64, all_values: &[f64]) -> f64 {
    let total: f64 = all_values.iter().sum();
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

/// Completion percentage; `None` when no flows were initiated, so displays
/// show a sentinel instead of a NaN.
pub fn completion_rate(initiated: f64, completed: f64) -> Option<f64> {
    if initiated > 0.0 {
        Some(completed / initiated * 100.0)
    } else {
        None
    }
}

/// Per-item `value / max` weights clamped to `[0, 1]`; all zeros when the
/// maximum is not positive.
pub fn relative_intensity(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0, f64::max);
    if max > 0.0 {
        values
            .iter()
            .map(|value| (value / max).clamp(0.0, 1.0))
            .collect()
    } else {
        vec![0.0; values.len()]
    }
}
