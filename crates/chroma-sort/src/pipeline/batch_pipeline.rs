use image::DynamicImage;
use rayon::prelude::*;

use super::options::{FailurePolicy, PipelineOptions, RenderOptions};
use super::thumbnail::{render_thumbnail, thumbnail_id};
use crate::classified::{Batch, ClassifiedImage};
use crate::error::PipelineError;
use crate::extract::ColorExtractor;
use crate::sort::SortStrategy;

/// One encoded image submitted for sorting.
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ImageInput {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// A rendered preview in final sort order.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    /// Identifier the page renderer refers to, e.g. `image_0.jpg`.
    pub id: String,
    /// JPEG bytes, `size` x `size`, no alpha.
    pub jpeg: Vec<u8>,
    pub image: ClassifiedImage,
}

/// An input left out of the batch under [`FailurePolicy::Skip`].
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedImage {
    pub index: usize,
    pub name: String,
    pub reason: String,
}

/// Output of [`BatchPipeline::run`].
#[derive(Debug, Clone)]
pub struct SortedBatch {
    pub strategy: SortStrategy,
    /// Thumbnail side length in pixels.
    pub size: u32,
    pub thumbnails: Vec<Thumbnail>,
    pub skipped: Vec<SkippedImage>,
}

impl SortedBatch {
    /// Thumbnail identifiers in display order.
    pub fn ids(&self) -> Vec<String> {
        self.thumbnails.iter().map(|t| t.id.clone()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Thumbnail> {
        self.thumbnails.iter().find(|t| t.id == id)
    }
}

/// Runs a batch of images through extraction, classification, sorting and
/// thumbnail rendering.
#[derive(Debug, Clone, Default)]
pub struct BatchPipeline {
    extractor: ColorExtractor,
    on_failure: FailurePolicy,
}

impl BatchPipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self {
            extractor: ColorExtractor::new(options.extract),
            on_failure: options.on_failure,
        }
    }

    /// Decode and classify every input in parallel.
    ///
    /// Returns the batch in submission order, the decoded images indexed by
    /// submission position (`None` for skipped inputs), and the skipped list.
    pub fn classify(
        &self,
        inputs: &[ImageInput],
    ) -> Result<(Batch, Vec<Option<DynamicImage>>, Vec<SkippedImage>), PipelineError> {
        let results: Vec<Result<(ClassifiedImage, DynamicImage), PipelineError>> = inputs
            .par_iter()
            .enumerate()
            .map(|(index, input)| self.classify_one(index, input))
            .collect();

        let mut batch = Vec::with_capacity(results.len());
        let mut decoded = Vec::with_capacity(results.len());
        let mut skipped = Vec::new();

        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok((classified, image)) => {
                    batch.push(classified);
                    decoded.push(Some(image));
                }
                Err(e) if self.on_failure == FailurePolicy::Skip => {
                    tracing::warn!(error = %e, "Skipping image");
                    skipped.push(SkippedImage {
                        index,
                        name: inputs[index].name.clone(),
                        reason: e.to_string(),
                    });
                    decoded.push(None);
                }
                Err(e) => return Err(e),
            }
        }

        Ok((batch, decoded, skipped))
    }

    fn classify_one(
        &self,
        index: usize,
        input: &ImageInput,
    ) -> Result<(ClassifiedImage, DynamicImage), PipelineError> {
        let image =
            image::load_from_memory(&input.bytes).map_err(|source| PipelineError::Decode {
                name: input.name.clone(),
                source,
            })?;

        let color = self
            .extractor
            .extract(&image)
            .map_err(|source| PipelineError::Extract {
                name: input.name.clone(),
                source,
            })?;

        let classified = ClassifiedImage::from_color(index, input.name.clone(), color);
        tracing::debug!(
            name = %classified.name,
            color = %classified.color,
            hue = classified.hue,
            category = %classified.category,
            distance = classified.distance_to_center,
            "Classified image"
        );

        Ok((classified, image))
    }

    /// Classify, sort, and render thumbnails for a whole batch.
    pub fn run(
        &self,
        inputs: &[ImageInput],
        strategy: &SortStrategy,
        render: &RenderOptions,
    ) -> Result<SortedBatch, PipelineError> {
        let (batch, mut decoded, skipped) = self.classify(inputs)?;
        let sorted = strategy.apply(batch);

        // Sorting is the barrier: pair each survivor with its pixels again
        let ordered: Vec<(ClassifiedImage, DynamicImage)> = sorted
            .into_iter()
            .filter_map(|image| {
                decoded
                    .get_mut(image.index)
                    .and_then(Option::take)
                    .map(|source| (image, source))
            })
            .collect();

        let thumbnails = ordered
            .into_par_iter()
            .enumerate()
            .map(|(position, (image, source))| {
                let jpeg = render_thumbnail(&source, render).map_err(|e| PipelineError::Encode {
                    name: image.name.clone(),
                    source: e,
                })?;
                Ok(Thumbnail {
                    id: thumbnail_id(position),
                    jpeg,
                    image,
                })
            })
            .collect::<Result<Vec<_>, PipelineError>>()?;

        tracing::info!(
            submitted = inputs.len(),
            sorted = thumbnails.len(),
            skipped = skipped.len(),
            method = strategy.method(),
            "Sorted image batch"
        );

        Ok(SortedBatch {
            strategy: *strategy,
            size: render.size(),
            thumbnails,
            skipped,
        })
    }
}
