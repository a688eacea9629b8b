//! Small numeric helpers shared by the statistics code

/// Arithmetic mean, or 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Safely calculates a rate from a count and a total
///
/// Returns 0.0 if the total is zero.
pub fn win_rate(wins: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    wins as f64 / total as f64
}
