use crate::model::Roster;

/// Arithmetic mean of all grades, or `None` when the roster is empty.
pub fn class_average(roster: &Roster) -> Option<f64> {
    if roster.is_empty() {
        None
    } else {
        Some(raw_average(roster))
    }
}

/// Unguarded `sum / n`, which yields NaN for an empty roster.
#[allow(clippy::cast_precision_loss)]
pub fn raw_average(roster: &Roster) -> f64 {
    roster.grades().sum::<f64>() / roster.len() as f64
}
