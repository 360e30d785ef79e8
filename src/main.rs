use anyhow::{Context, Result};
use bubbletea_rs::Program;
use catalog_view::app::{self, CatalogApp, Launch};
use catalog_view::catalog::Model as Catalog;
use catalog_view::config::{Overrides, Settings};
use catalog_view::handlers::{InitialInput, InputHandlers, SortControl};
use catalog_view::logging::{self, LogTarget};
use catalog_view::render::{html, ViewModel};
use catalog_view::repository::{load_products, HttpProductRepository, ProductRepository};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Browse a remote product catalog with search, sorting and pagination.
#[derive(Parser, Debug)]
#[command(name = "catalog", version)]
struct Args {
    /// Endpoint returning the product list as JSON.
    #[arg(long)]
    api_url: Option<String>,
    /// Initial page size; must be one of the configured choices.
    #[arg(long)]
    page_size: Option<usize>,
    /// Config file (defaults to ./catalog.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    timeout_secs: Option<u64>,
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Write a standalone HTML page to PATH instead of starting the viewer.
    #[arg(long, value_name = "PATH")]
    export_html: Option<PathBuf>,
    /// Search term applied before the first render.
    #[arg(long)]
    search: Option<String>,
    /// Sort applied before the first render: price-asc, price-desc, name-asc or name-desc.
    #[arg(long, value_name = "CONTROL")]
    sort: Option<SortControl>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let settings = Settings::load(
        args.config.as_deref(),
        Overrides {
            api_url: args.api_url,
            page_size: args.page_size,
            timeout_secs: args.timeout_secs,
            log_file: args.log_file,
        },
    )
    .context("invalid configuration")?;

    let initial = InitialInput {
        search: args.search,
        sort: args.sort,
    };
    let repository: Arc<dyn ProductRepository> = Arc::new(HttpProductRepository::new(
        settings.api_url.clone(),
        settings.timeout(),
    ));

    match args.export_html {
        Some(path) => {
            logging::init(&LogTarget::Stderr).context("failed to initialize logging")?;
            export_html(&settings, &initial, repository.as_ref(), &path).await
        }
        None => {
            logging::init(&LogTarget::File(settings.log_file.clone()))
                .with_context(|| format!("failed to open log file {}", settings.log_file.display()))?;
            run_viewer(settings, initial, repository).await
        }
    }
}

async fn export_html(
    settings: &Settings,
    initial: &InitialInput,
    repository: &dyn ProductRepository,
    path: &Path,
) -> Result<()> {
    let products = load_products(repository).await;
    let mut catalog = Catalog::new(products, settings.page_size);
    let mut handlers = InputHandlers::new(settings.page_size_choices.clone());
    initial.apply(&mut handlers, &mut catalog);

    let view = ViewModel::from_state(&catalog);
    let page = html::document(
        &view,
        &html::PageControls {
            search: initial.search.as_deref().unwrap_or_default(),
            page_size: catalog.page_size(),
            page_size_choices: handlers.page_size_choices(),
            active_sort: handlers.active_sort(),
        },
    );

    std::fs::write(path, page).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), products = catalog.len(), "exported catalog page");
    Ok(())
}

async fn run_viewer(
    settings: Settings,
    initial: InitialInput,
    repository: Arc<dyn ProductRepository>,
) -> Result<()> {
    info!(api_url = %settings.api_url, "starting catalog viewer");
    app::configure(Launch {
        settings,
        initial,
        repository,
    });

    let program = Program::<CatalogApp>::builder()
        .alt_screen(true)
        .build()
        .map_err(|e| anyhow::anyhow!("failed to create terminal program: {e}"))?;
    program
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("terminal program failed: {e}"))?;
    Ok(())
}
