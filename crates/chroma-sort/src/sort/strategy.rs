//! Caller-selected sort strategy.

use super::{sort_by_spectrum, sort_by_target_hue};
use crate::category::ColorCategory;
use crate::classified::Batch;
use crate::error::ParamError;

/// How a batch should be ordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortStrategy {
    /// Category buckets in spectrum order.
    Spectrum,
    /// The `n` images nearest to `target`'s center hue.
    TopN { target: ColorCategory, n: usize },
}

impl SortStrategy {
    /// Build a strategy from raw form values.
    ///
    /// `method` is required and must be `spectrum` or `top_n`. For `top_n`,
    /// a missing `count` means 0 and a missing or unknown `target` falls back
    /// to Red. A present but malformed `count` is an error.
    ///
    /// ```
    /// use chroma_sort::{ColorCategory, SortStrategy};
    /// let s = SortStrategy::from_params(Some("top_n"), Some("blue"), Some("3")).unwrap();
    /// assert_eq!(s, SortStrategy::TopN { target: ColorCategory::Blue, n: 3 });
    ///
    /// let s = SortStrategy::from_params(Some("top_n"), Some("?"), None).unwrap();
    /// assert_eq!(s, SortStrategy::TopN { target: ColorCategory::Red, n: 0 });
    /// ```
    pub fn from_params(
        method: Option<&str>,
        target: Option<&str>,
        count: Option<&str>,
    ) -> Result<Self, ParamError> {
        let method = method
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or(ParamError::Missing("sorting_method"))?;

        match method.to_ascii_lowercase().as_str() {
            "spectrum" => Ok(SortStrategy::Spectrum),
            "top_n" | "top-n" | "topn" => {
                let n = match count.map(str::trim).filter(|c| !c.is_empty()) {
                    None => 0,
                    Some(raw) => raw.parse::<usize>().map_err(|_| ParamError::InvalidNumber {
                        name: "top_n",
                        value: raw.to_string(),
                    })?,
                };
                Ok(SortStrategy::TopN {
                    target: ColorCategory::target_for(target),
                    n,
                })
            }
            _ => Err(ParamError::UnknownStrategy(method.to_string())),
        }
    }

    /// Reorder (and for top-N, truncate) a batch.
    pub fn apply(&self, batch: Batch) -> Batch {
        match *self {
            SortStrategy::Spectrum => sort_by_spectrum(batch),
            SortStrategy::TopN { target, n } => sort_by_target_hue(batch, target.target_hue(), n),
        }
    }

    /// Short identifier, as accepted by [`SortStrategy::from_params`].
    pub fn method(&self) -> &'static str {
        match self {
            SortStrategy::Spectrum => "spectrum",
            SortStrategy::TopN { .. } => "top_n",
        }
    }

    /// Target hue for top-N, `None` for spectrum.
    pub fn target_hue(&self) -> Option<f64> {
        match self {
            SortStrategy::Spectrum => None,
            SortStrategy::TopN { target, .. } => Some(target.target_hue()),
        }
    }
}
