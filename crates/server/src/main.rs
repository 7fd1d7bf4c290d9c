use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chequer_ocr::{ChequePipeline, OcrConfig, TesseractRecognizer};

mod error;
mod intake;
mod routes;

use routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chequer_server=info,chequer_ocr=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = OcrConfig::default();
    let recognizer = TesseractRecognizer::new(config.clone());
    let pipeline = ChequePipeline::new(recognizer, config);

    let state = AppState {
        pipeline: Arc::new(pipeline),
        http: reqwest::Client::new(),
    };
    let app = routes::create_router(state);

    let addr = std::env::var("CHEQUER_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
    tracing::info!("chequer listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
