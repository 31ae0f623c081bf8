mod config;
mod model;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::model::{AdditiveModel, SalaryModel};

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().expect("invalid server configuration");

    // Load model (non-fatal: /predict answers 500 until it is fixed).
    let model: Option<Arc<dyn SalaryModel>> = match AdditiveModel::load(&config.model_path) {
        Ok(model) => {
            let encoders = model.encoders();
            tracing::info!(
                path = %config.model_path.display(),
                genders = %encoders.gender.classes_display(),
                education = %encoders.education.classes_display(),
                job_titles = encoders.job_title.len(),
                "salary model loaded"
            );
            Some(Arc::new(model))
        }
        Err(e) => {
            tracing::warn!(path = %config.model_path.display(), error = %e, "salary model not loaded; predictions disabled");
            None
        }
    };

    let state = state::AppState::new(model);

    let app = match routes::leptos_app(state.clone(), &config.static_dir) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos shell unavailable; serving API only");
            routes::api_routes(state, &config.static_dir)
        }
    };

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, "salary predictor listening");
    axum::serve(listener, app).await.expect("server failed");
}
