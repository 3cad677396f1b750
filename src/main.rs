use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use phase_filters::Phase;
use phasecast::api;
use phasecast::assets::{AssetCategory, AssetLoader};
use phasecast::models::AppConfig;
use phasecast::server;
use phasecast::services::ImagePipeline;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Parser)]
#[command(name = "phasecast")]
#[command(about = "Phasecast - arterial/venous contrast-phase preview server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Process an image file directly (no server needed)
    Process {
        /// Input image (JPEG, PNG, GIF, BMP, TIFF, WebP)
        #[arg(short, long)]
        input: PathBuf,

        /// Phase to apply: "arterial" or "venous"
        #[arg(short, long, default_value = "arterial")]
        phase: String,

        /// Output PNG file path
        #[arg(short, long, required_unless_present = "data_uri")]
        output: Option<PathBuf>,

        /// Print the result as a data URI instead of writing a file
        #[arg(long)]
        data_uri: bool,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract the frontend bundle
        #[arg(long)]
        frontend: bool,

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
        title = "Phasecast API",
        description = "Arterial and venous contrast-phase image previews",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_process, api::handle_health),
    components(schemas(
        api::ProcessForm,
        api::ProcessResponse,
        api::ErrorResponse,
        api::HealthResponse,
    )),
    tags(
        (name = "Processing", description = "Phase filter application"),
        (name = "Health", description = "Liveness checks")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Process {
            input,
            phase,
            output,
            data_uri,
        }) => run_process_command(&input, &phase, output.as_deref(), data_uri),
        Some(Commands::Init {
            frontend,
            config,
            all,
            force,
            list,
        }) => run_init_command(frontend, config, all, force, list),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Run the pipeline on a file and write the PNG (or print the data URI)
fn run_process_command(
    input: &std::path::Path,
    phase: &str,
    output: Option<&std::path::Path>,
    data_uri: bool,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phasecast=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let phase: Phase = phase.parse()?;
    let loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&loader);
    let pipeline = ImagePipeline::new(&config);

    let bytes = std::fs::read(input)?;
    let encoded = pipeline.process(&bytes, phase)?;

    if data_uri {
        println!("{}", encoded.data_uri);
    }
    if let Some(output) = output {
        std::fs::write(output, &encoded.png)?;
        eprintln!(
            "Processed {} ({phase}) -> {} ({} bytes)",
            input.display(),
            output.display(),
            encoded.png.len()
        );
    }

    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(
    frontend: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Frontend:");
        for f in AssetLoader::list_embedded(AssetCategory::Frontend) {
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
    if all || frontend {
        categories.push(AssetCategory::Frontend);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --frontend, or --config");
        eprintln!("\nRun 'phasecast init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let report = AssetLoader::from_env().init(&categories, force)?;

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
    let frontend_dir = std::env::var("FRONTEND_DIR").ok();

    println!("Phasecast v{VERSION}");
    println!("Arterial/venous contrast-phase preview server\n");

    println!("Environment Variables:");
    println!("  BIND_ADDR    = {}", describe_bind_addr(bind_addr.as_deref()));
    println!(
        "  CONFIG_FILE  = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  FRONTEND_DIR = {}",
        frontend_dir.as_deref().unwrap_or("(not set)")
    );

    println!("\nAsset Sources:");
    let config_source = match config_file {
        Some(ref path) if PathBuf::from(path).exists() => path.to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("  Config:   {config_source}");

    let embedded_count = AssetLoader::list_embedded(AssetCategory::Frontend).len();
    let frontend_source = match frontend_dir {
        Some(ref path) if PathBuf::from(path).is_dir() => path.to_string(),
        Some(_) => format!("embedded ({embedded_count} files, directory not found)"),
        None => format!("embedded ({embedded_count} files)"),
    };
    println!("  Frontend: {frontend_source}");

    println!("\nPhases:");
    for phase in Phase::ALL {
        println!("  {phase}");
    }

    println!("\nCommands:");
    println!("  phasecast serve    Start the HTTP server");
    println!("  phasecast process  Process an image file to PNG");
    println!("  phasecast init     Extract embedded assets");
    println!("\nRun 'phasecast --help' for more details.");
}

/// Bind address as shown by the status command
fn describe_bind_addr(configured: Option<&str>) -> String {
    match configured {
        Some(addr) => addr.to_string(),
        None => format!("{DEFAULT_BIND_ADDR} (default)"),
    }
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phasecast=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let frontend_dir = std::env::var("FRONTEND_DIR").ok().map(PathBuf::from);
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    tracing::info!(
        frontend = ?frontend_dir.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        config = ?config_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        "Asset sources configured"
    );

    let asset_loader = Arc::new(AssetLoader::new(frontend_dir, config_file));
    let state = server::create_app_state(asset_loader)?;

    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Phasecast server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
