use std::sync::Arc;

use fram_store::agent::storefront_agent::StorefrontAgent;
use fram_store::config::Config;
use fram_store::error::StartupError;
use fram_store::knowledge::KnowledgeDocument;
use fram_store::openai_client::OpenAiClient;
use fram_store::{app_router, AppState};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    if let Err(e) = init_logging() {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run().await {
        tracing::error!("❌ FRAM API failed to start: {}", e);
        if matches!(e, StartupError::KnowledgeMissing(_)) {
            tracing::error!("Put knowledge.txt next to the server or set KNOWLEDGE_PATH.");
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;

    // Knowledge document is mandatory; it is the model's only source
    let knowledge = Arc::new(KnowledgeDocument::load(&config.knowledge_path)?);
    tracing::info!("KNOWLEDGE file: {}", knowledge.path().display());
    tracing::info!("KNOWLEDGE length: {}", knowledge.len());
    tracing::info!("Has Braastad? {}", knowledge.has_farm_name());
    tracing::info!("Has Oppdalslinna? {}", knowledge.has_farm_address());

    let openai = OpenAiClient::new(config.openai_api_key.clone())
        .with_base_url(config.openai_base_url.clone())
        .with_model(config.openai_model.clone())
        .with_timeout(config.openai_timeout);

    let has_api_key = openai.has_api_key();
    if has_api_key {
        tracing::info!("Initializing OpenAI client ({})...", config.openai_model);
    } else {
        tracing::warn!("OPENAI_API_KEY not found. Chat runs in demo mode: canned answers only.");
        tracing::info!("To enable model answers, set OPENAI_API_KEY (e.g. in .env)");
    }

    let agent = StorefrontAgent::new(Arc::new(openai), &knowledge);
    let shared_state = Arc::new(AppState::new(knowledge, agent, has_api_key));

    let app = app_router(shared_state, &config.static_dir);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;

    tracing::info!("FRAM API listening on http://{}", addr);
    tracing::info!("Health: http://localhost:{}/api/health", config.port);
    tracing::info!("OpenAI test: http://localhost:{}/api/ai-test", config.port);

    axum::serve(listener, app)
        .await
        .map_err(|source| StartupError::Bind { addr, source })
}

// Logging: RUST_LOG wins, LOG_FORMAT=json for log aggregation
fn init_logging() -> Result<(), StartupError> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug,fram_store=trace,reqwest=info,hyper=info,tower_http=info".to_string()
        } else {
            "info,fram_store=info,reqwest=warn,hyper=warn,tower_http=warn".to_string()
        }
    });

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log_level))
        .map_err(|e| StartupError::Logging(e.to_string()))?;

    let fmt_layer = if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| StartupError::Logging(e.to_string()))?;

    tracing::info!("🥕 FRAM API starting up...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Build mode: {}", if cfg!(debug_assertions) { "development" } else { "production" });
    tracing::info!("Log level: {}", log_level);

    Ok(())
}
