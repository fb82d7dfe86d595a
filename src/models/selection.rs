use chroma_sort::{ParamError, SortStrategy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use super::config::DefaultsConfig;

/// Grid layout of the preview and exported page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Layout {
    /// Number of thumbnails per grid row
    pub images_per_row: u32,
    /// Thumbnail side length in pixels
    pub image_size: u32,
}

impl Layout {
    /// Parse layout fields, using `defaults` for missing values
    ///
    /// Both values must be positive; `image_size` is capped at
    /// `defaults.max_image_size`.
    pub fn from_fields(
        images_per_row: Option<&str>,
        image_size: Option<&str>,
        defaults: &DefaultsConfig,
    ) -> Result<Self, ParamError> {
        let images_per_row =
            parse_positive("images_per_row", images_per_row, defaults.images_per_row)?;
        let image_size = parse_positive("image_size", image_size, defaults.image_size)?;

        if image_size > defaults.max_image_size {
            return Err(ParamError::InvalidNumber {
                name: "image_size",
                value: image_size.to_string(),
            });
        }

        Ok(Self {
            images_per_row,
            image_size,
        })
    }
}

/// Everything a user picks on the upload form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub strategy: SortStrategy,
    pub layout: Layout,
}

impl Selection {
    /// Build a selection from submitted form fields
    pub fn from_fields(
        fields: &HashMap<String, String>,
        defaults: &DefaultsConfig,
    ) -> Result<Self, ParamError> {
        let field = |name: &str| fields.get(name).map(String::as_str);

        let strategy = strategy_from_fields(
            field("sorting_method"),
            field("dominant_color"),
            field("top_n"),
            defaults,
        )?;
        let layout = Layout::from_fields(field("images_per_row"), field("image_size"), defaults)?;

        Ok(Self { strategy, layout })
    }
}

/// Parse the sort strategy, using `defaults.top_n` when no count is given
pub fn strategy_from_fields(
    method: Option<&str>,
    target: Option<&str>,
    count: Option<&str>,
    defaults: &DefaultsConfig,
) -> Result<SortStrategy, ParamError> {
    let default_count = defaults.top_n.to_string();
    let count = count
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(&default_count);
    SortStrategy::from_params(method, target, Some(count))
}

fn parse_positive(name: &'static str, raw: Option<&str>, default: u32) -> Result<u32, ParamError> {
    let raw = match raw.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => raw,
        None => return Ok(default),
    };

    let value = raw.parse::<i64>().map_err(|_| ParamError::InvalidNumber {
        name,
        value: raw.to_string(),
    })?;
    if value <= 0 {
        return Err(ParamError::NotPositive { name });
    }

    u32::try_from(value).map_err(|_| ParamError::InvalidNumber {
        name,
        value: raw.to_string(),
    })
}
