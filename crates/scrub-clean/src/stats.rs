//! Small statistics helpers used by imputation and clipping.

use std::collections::HashMap;

/// Median with linear interpolation: mean of the middle pair on even counts.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Linearly interpolated percentile of an already sorted slice, `q` in 0..=1.
pub fn percentile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let lower_value = *sorted.get(lower)?;
    let upper_value = *sorted.get(upper)?;
    Some(lower_value + (upper_value - lower_value) * (position - lower as f64))
}

/// Most frequent value; count ties break toward the lexicographically
/// smallest value, so a tied fill is deterministic regardless of row order.
pub fn mode<'a, I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by(|(value_a, count_a), (value_b, count_b)| {
            count_a.cmp(count_b).then(value_b.cmp(value_a))
        })
        .map(|(value, _)| value.to_string())
}
