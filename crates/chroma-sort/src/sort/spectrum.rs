use crate::classified::{Batch, ClassifiedImage};

/// Order a batch along the color spectrum.
///
/// Images are bucketed by category in [`crate::ColorCategory::SPECTRUM`] order and
/// sorted ascending by distance to their category center within a bucket.
/// The sort is stable, so equal distances keep their submitted order.
/// `Undefined` images have no place on the spectrum and are dropped.
pub fn sort_by_spectrum(batch: Batch) -> Batch {
    let mut buckets: [Vec<ClassifiedImage>; 7] = Default::default();

    for image in batch {
        match image.category.spectrum_index() {
            Some(i) => buckets[i].push(image),
            None => {
                tracing::debug!(name = %image.name, "Dropping image with undefined hue category");
            }
        }
    }

    buckets
        .into_iter()
        .flat_map(|mut bucket| {
            bucket.sort_by(|a, b| a.distance_to_center.total_cmp(&b.distance_to_center));
            bucket
        })
        .collect()
}
