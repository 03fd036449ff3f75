use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use turfbook::config::AppConfig;
use turfbook::handlers;
use turfbook::services::ai::groq::GroqProvider;
use turfbook::services::ai::ollama::OllamaProvider;
use turfbook::services::ai::LlmProvider;
use turfbook::services::engine::BookingEngine;
use turfbook::state::AppState;
use turfbook::store::RecordStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let store = RecordStore::open(&config.database_path)?;
    let engine = BookingEngine::new(store);

    let llm: Box<dyn LlmProvider> = match config.llm_provider.as_str() {
        "ollama" => {
            tracing::info!(
                "using Ollama LLM provider (url: {}, model: {})",
                config.ollama_url,
                config.ollama_model
            );
            Box::new(OllamaProvider::new(
                config.ollama_url.clone(),
                config.ollama_model.clone(),
            ))
        }
        _ => {
            anyhow::ensure!(
                !config.groq_api_key.is_empty(),
                "GROQ_API_KEY must be set when LLM_PROVIDER=groq"
            );
            tracing::info!("using Groq LLM provider (model: {})", config.groq_model);
            Box::new(GroqProvider::new(
                config.groq_api_key.clone(),
                config.groq_model.clone(),
            ))
        }
    };

    let state = Arc::new(AppState {
        engine: Mutex::new(engine),
        llm,
        transcript: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/", get(handlers::pages::index))
        .route("/health", get(handlers::health::health))
        .route("/chat", post(handlers::chat::chat))
        .route("/api/turfs", get(handlers::turfs::list_turfs))
        .route("/api/turfs/:id", get(handlers::turfs::get_turf))
        .route("/api/bookings", get(handlers::bookings::list_bookings))
        .route("/api/book", post(handlers::bookings::create_booking))
        .route(
            "/api/cancel/:booking_id",
            post(handlers::bookings::cancel_booking),
        )
        .route(
            "/api/availability/:turf_id/:date",
            get(handlers::bookings::check_availability),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
