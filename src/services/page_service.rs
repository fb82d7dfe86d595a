use base64::Engine;
use chroma_sort::{ColorCategory, SortedBatch};
use serde::Serialize;
use std::sync::Arc;
use tera::{Context, Tera};

use crate::assets::AssetLoader;
use crate::models::{AppConfig, Layout};

pub const UPLOAD_TEMPLATE: &str = "upload.html";
pub const PREVIEW_TEMPLATE: &str = "preview.html";
pub const OUTPUT_TEMPLATE: &str = "output.html";

/// Error type for template rendering
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Failed to read template: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct CategoryOption {
    value: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
struct PreviewImage<'a> {
    id: &'a str,
    name: &'a str,
    category: &'static str,
    hue: f64,
}

#[derive(Serialize)]
struct SkippedEntry<'a> {
    name: &'a str,
    reason: &'a str,
}

/// Renders the HTML pages with Tera
///
/// Templates are loaded fresh on every render so an external
/// `TEMPLATES_DIR` can be edited while the server runs.
pub struct PageService {
    loader: Arc<AssetLoader>,
}

impl PageService {
    pub fn new(loader: Arc<AssetLoader>) -> Result<Self, TemplateError> {
        let service = Self { loader };

        // Fail early on templates that do not parse
        for name in [UPLOAD_TEMPLATE, PREVIEW_TEMPLATE, OUTPUT_TEMPLATE] {
            service.load(name)?;
        }
        tracing::info!(
            templates = service.loader.list_templates().len(),
            "Page service initialized"
        );

        Ok(service)
    }

    fn load(&self, name: &str) -> Result<Tera, TemplateError> {
        let content = self.loader.read_template_string(name)?;
        let mut tera = Tera::default();
        tera.add_raw_template(name, &content)?;
        Ok(tera)
    }

    fn render(&self, name: &str, context: &Context) -> Result<String, TemplateError> {
        let tera = self.load(name)?;
        Ok(tera.render(name, context)?)
    }

    /// Upload form prefilled with the configured defaults
    pub fn render_upload(&self, config: &AppConfig) -> Result<String, TemplateError> {
        let categories: Vec<CategoryOption> = ColorCategory::SPECTRUM
            .iter()
            .map(|c| CategoryOption {
                value: c.as_str(),
                label: c.label(),
            })
            .collect();

        let mut context = Context::new();
        context.insert("allowed_extensions", &config.uploads.allowed_extensions);
        context.insert("categories", &categories);
        context.insert("top_n", &config.defaults.top_n);
        context.insert("images_per_row", &config.defaults.images_per_row);
        context.insert("image_size", &config.defaults.image_size);
        context.insert("max_image_size", &config.defaults.max_image_size);

        self.render(UPLOAD_TEMPLATE, &context)
    }

    /// Preview grid of a stored batch, with a form to export it
    pub fn render_preview(
        &self,
        batch_id: &str,
        batch: &SortedBatch,
        layout: Layout,
    ) -> Result<String, TemplateError> {
        let images: Vec<PreviewImage> = batch
            .thumbnails
            .iter()
            .map(|t| PreviewImage {
                id: &t.id,
                name: &t.image.name,
                category: t.image.category.as_str(),
                hue: t.image.hue,
            })
            .collect();
        let skipped: Vec<SkippedEntry> = batch
            .skipped
            .iter()
            .map(|s| SkippedEntry {
                name: &s.name,
                reason: &s.reason,
            })
            .collect();

        let mut context = Context::new();
        context.insert("batch", batch_id);
        context.insert("method", batch.strategy.method());
        context.insert("images", &images);
        context.insert("skipped", &skipped);
        context.insert("image_filenames", &batch.ids().join(","));
        context.insert("images_per_row", &layout.images_per_row);
        context.insert("image_size", &layout.image_size);

        self.render(PREVIEW_TEMPLATE, &context)
    }

    /// Self-contained page with every thumbnail inlined as a data URI
    pub fn render_output<'a, I>(&self, jpegs: I, layout: Layout) -> Result<String, TemplateError>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let images: Vec<String> = jpegs.into_iter().map(jpeg_data_uri).collect();

        let mut context = Context::new();
        context.insert("images", &images);
        context.insert("images_per_row", &layout.images_per_row);
        context.insert("image_size", &layout.image_size);

        self.render(OUTPUT_TEMPLATE, &context)
    }
}

/// Encode JPEG bytes as a `data:image/jpeg;base64,...` URI
pub fn jpeg_data_uri(jpeg: &[u8]) -> String {
    format!(
        "data:image/jpeg;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(jpeg)
    )
}
