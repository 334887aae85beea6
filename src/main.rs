use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

use shelterfront::adoption::repository::{
    ApplicationRecord, MemoryRepository, SubmissionError, SubmissionSink,
};
use shelterfront::adoption::{adoption_router, AdoptionService};
use shelterfront::catalog::{
    catalog_router, parse_age_years, sample_pets, AgeBand, CatalogState, FilterSelection,
    PetCatalogImporter, PetRecord, SearchRequest, SortKey,
};
use shelterfront::config::AppConfig;
use shelterfront::error::AppError;
use shelterfront::profile::{AdopterLedger, MemoryStore};
use shelterfront::telemetry;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "shelterfront",
    about = "Run the pet adoption platform's search and application service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Offline catalog utilities for demos and smoke checks
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
    /// Pet catalog CSV export (falls back to the built-in sample catalog)
    #[arg(long)]
    catalog_csv: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Run a search against a catalog and print the results
    Search(SearchArgs),
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Pet catalog CSV export (falls back to the built-in sample catalog)
    #[arg(long)]
    catalog_csv: Option<PathBuf>,
    /// Free-text query over name, breed, location, and species
    #[arg(long, short = 'q')]
    query: Option<String>,
    /// Species filter; repeat for multiple values
    #[arg(long)]
    species: Vec<String>,
    /// Age band filter (puppy, young, adult, senior); repeat for multiple
    #[arg(long)]
    age_band: Vec<String>,
    /// Result order: newest, oldest, name, or age
    #[arg(long, default_value = "newest")]
    sort: String,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Catalog {
            command: CatalogCommand::Search(args),
        } => run_catalog_search(args),
    }
}

fn load_catalog(csv_path: Option<PathBuf>) -> Result<Vec<PetRecord>, AppError> {
    match csv_path {
        Some(path) => Ok(PetCatalogImporter::from_path(path)?),
        None => Ok(sample_pets()),
    }
}

/// Submission collaborator for the demo server: forwards to the log only.
struct ForwardingSink;

impl SubmissionSink for ForwardingSink {
    fn deliver(&self, record: &ApplicationRecord) -> Result<(), SubmissionError> {
        info!(
            application_id = %record.application_id.0,
            pet = %record.pet_name,
            "adoption application forwarded for review"
        );
        Ok(())
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.catalog_csv.take() {
        config.catalog.csv_path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let pets = load_catalog(config.catalog.csv_path.clone())?;
    info!(count = pets.len(), "pet catalog loaded");

    let store = Arc::new(MemoryStore::default());
    let ledger = AdopterLedger::new(store);

    let catalog_state = Arc::new(CatalogState {
        pets,
        ledger: ledger.clone(),
    });
    let adoption_service = Arc::new(AdoptionService::new(
        Arc::new(MemoryRepository::default()),
        Arc::new(ForwardingSink),
        ledger,
    ));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(catalog_router(catalog_state))
        .merge(adoption_router(adoption_service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "shelterfront service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_catalog_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        catalog_csv,
        query,
        species,
        age_band,
        sort,
    } = args;

    let sort = SortKey::parse(&sort).ok_or_else(|| AppError::Cli(format!("unknown sort '{sort}'")))?;
    let age_bands = age_band
        .iter()
        .map(|value| {
            AgeBand::parse(value).ok_or_else(|| AppError::Cli(format!("unknown age band '{value}'")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let pets = load_catalog(catalog_csv)?;
    let request = SearchRequest {
        query: query.unwrap_or_default(),
        filters: FilterSelection {
            species,
            age_bands,
            ..FilterSelection::default()
        },
        sort,
    };

    let results = shelterfront::catalog::search(&pets, &request);
    render_results(&results);

    Ok(())
}

fn render_results(results: &[&PetRecord]) {
    if results.is_empty() {
        println!("No pets match the current search.");
        return;
    }

    println!("{} pet(s) found", results.len());
    for pet in results {
        println!(
            "- {} | {} | {} | {} ({} yr) | {} | {} | {}",
            pet.id.0,
            pet.name,
            pet.species,
            pet.age,
            parse_age_years(&pet.age),
            pet.size.label(),
            pet.status.label(),
            pet.location
        );
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
