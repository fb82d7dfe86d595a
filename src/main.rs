use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use chroma_sort::ImageInput;
use huesort::api;
use huesort::assets::{AssetCategory, AssetLoader};
use huesort::models::{strategy_from_fields, AppConfig, Layout};
use huesort::server;
use huesort::services::{secure_filename, PageService, SortService};

#[derive(Parser)]
#[command(name = "huesort")]
#[command(about = "Sort image batches by dominant color and export them as an HTML grid")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Sort image files and write the HTML page
    Sort {
        /// Image files to sort
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Sorting method: "spectrum" or "top_n"
        #[arg(short, long, default_value = "spectrum")]
        method: String,

        /// Target color for top_n (red, orange, yellow, green, cyan, blue, violet)
        #[arg(short, long)]
        color: Option<String>,

        /// Number of images to keep for top_n (defaults to the configured top_n)
        #[arg(short = 'n', long)]
        top_n: Option<String>,

        /// Thumbnail side length in pixels
        #[arg(short, long)]
        size: Option<String>,

        /// Images per grid row
        #[arg(short, long)]
        per_row: Option<String>,

        /// Output HTML file path
        #[arg(short, long, default_value = "output.html")]
        output: PathBuf,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract page templates
        #[arg(long)]
        templates: bool,

        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Huesort API",
        description = "Sort image batches by dominant color",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_sort),
    components(schemas(
        api::SortForm,
        api::SortResponse,
        api::SortedImage,
        api::SkippedUpload,
        huesort::models::Layout,
    )),
    tags((name = "Sort", description = "Dominant color sorting"))
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Sort {
            files,
            method,
            color,
            top_n,
            size,
            per_row,
            output,
        }) => {
            run_sort_command(SortArgs {
                files,
                method,
                color,
                top_n,
                size,
                per_row,
                output,
            })
            .await
        }
        Some(Commands::Init {
            templates,
            config,
            all,
            force,
            list,
        }) => run_init_command(templates, config, all, force, list),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

struct SortArgs {
    files: Vec<PathBuf>,
    method: String,
    color: Option<String>,
    top_n: Option<String>,
    size: Option<String>,
    per_row: Option<String>,
    output: PathBuf,
}

/// Sort files from disk and write the HTML page (no server needed)
async fn run_sort_command(args: SortArgs) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huesort=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let asset_loader = Arc::new(AssetLoader::from_env());
    let config = Arc::new(AppConfig::load_from_assets(&asset_loader));

    let strategy = strategy_from_fields(
        Some(args.method.as_str()),
        args.color.as_deref(),
        args.top_n.as_deref(),
        &config.defaults,
    )?;
    let layout = Layout::from_fields(
        args.per_row.as_deref(),
        args.size.as_deref(),
        &config.defaults,
    )?;

    let mut images = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let display_name = path.display().to_string();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !config.is_allowed_file(&file_name) {
            eprintln!("Skipping {display_name}: extension not allowed");
            continue;
        }
        let name = secure_filename(&file_name);
        let bytes = std::fs::read(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {display_name}: {e}"))?;
        images.push(ImageInput::new(name, bytes));
    }

    let sorter = SortService::new(config);
    let batch = sorter.sort(images, strategy, layout.image_size).await?;

    for skipped in &batch.skipped {
        eprintln!("Skipped {}: {}", skipped.name, skipped.reason);
    }

    let pages = PageService::new(asset_loader)?;
    let html = pages.render_output(batch.thumbnails.iter().map(|t| t.jpeg.as_slice()), layout)?;
    std::fs::write(&args.output, &html)?;

    println!(
        "Sorted {} images by {} into {} ({} bytes)",
        batch.thumbnails.len(),
        strategy.method(),
        args.output.display(),
        html.len()
    );
    for thumbnail in &batch.thumbnails {
        let image = &thumbnail.image;
        println!(
            "  {:>3}. {:<8} {:>6.1}°  {}  {}",
            image.index,
            image.category.as_str(),
            image.hue,
            image.color.to_hex(),
            image.name
        );
    }

    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(
    templates: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Templates:");
        for f in AssetLoader::list_embedded(AssetCategory::Templates) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    // Determine which categories to extract
    let mut categories = Vec::new();
    if all || templates {
        categories.push(AssetCategory::Templates);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --templates, or --config");
        eprintln!("\nRun 'huesort init --list' to see embedded assets.");
        std::process::exit(1);
    }

    // Paths from env vars (or defaults)
    let loader = AssetLoader::from_env();
    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let templates_dir = std::env::var("TEMPLATES_DIR").ok();

    println!("Huesort v{VERSION}");
    println!("Sort image batches by dominant color\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR     = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE   = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  TEMPLATES_DIR = {}",
        templates_dir.as_deref().unwrap_or("(not set)")
    );

    println!("\nAsset Sources:");

    let config_source = match config_file {
        Some(ref path) if PathBuf::from(path).exists() => path.to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("  Config:    {config_source}");

    let loader = AssetLoader::new(templates_dir.clone().map(PathBuf::from), None);
    let embedded_count = AssetLoader::list_embedded(AssetCategory::Templates).len();
    match templates_dir {
        Some(ref path) if PathBuf::from(path).exists() => println!(
            "  Templates: {path} ({} files, {embedded_count} embedded)",
            loader.list_templates().len()
        ),
        _ => println!("  Templates: embedded ({embedded_count} files)"),
    }

    println!("\nCommands:");
    println!("  huesort serve   Start the HTTP server");
    println!("  huesort sort    Sort image files into an HTML page");
    println!("  huesort init    Extract embedded assets");
    println!("\nRun 'huesort --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huesort=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    let describe = |p: Option<&std::path::Path>| {
        p.map(|p| p.display().to_string())
            .unwrap_or_else(|| "embedded".to_string())
    };
    tracing::info!(
        templates = %describe(asset_loader.templates_dir()),
        config = %describe(asset_loader.config_file()),
        "Asset sources configured"
    );

    // Seed if configured paths are empty
    match asset_loader.seed_if_configured() {
        Ok(report) if !report.is_empty() => {
            tracing::info!(
                templates = report.templates_seeded.len(),
                config = report.config_seeded,
                "Seeded empty paths with embedded assets"
            );
        }
        Err(e) => {
            tracing::warn!(%e, "Failed to seed assets");
        }
        _ => {}
    }

    let state = server::create_app_state(asset_loader)?;

    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Huesort server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
