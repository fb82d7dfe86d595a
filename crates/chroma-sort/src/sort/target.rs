use crate::classified::Batch;

/// Rank a batch by closeness to `target_hue` and keep the first `n`.
///
/// The whole batch is sorted (not bucketed) ascending by circular distance
/// to the target; ties keep submitted order. `n` larger than the batch
/// returns everything, `n == 0` returns an empty batch.
pub fn sort_by_target_hue(mut batch: Batch, target_hue: f64, n: usize) -> Batch {
    batch.sort_by(|a, b| a.distance_to(target_hue).total_cmp(&b.distance_to(target_hue)));
    batch.truncate(n);
    batch
}
