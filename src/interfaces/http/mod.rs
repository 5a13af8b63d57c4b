//! HTTP surface: `GET /`, `GET /health`, `POST /predict`.

pub mod dto;
pub mod handlers;

use crate::application::ml::ModelStore;
use crate::config::ServerEnvConfig;
use crate::infrastructure::observability::{Metrics, RejectReason};
use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::{App, HttpResponse, HttpServer, middleware, web};
use dto::ErrorDetail;
use tracing::{info, warn};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: ModelStore,
    pub metrics: Metrics,
}

/// Any origin, method and header; credentials allowed.
pub fn cors() -> Cors {
    Cors::permissive()
}

/// Body extraction failures answer 422 with a `detail` message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        let detail = err.to_string();
        warn!("Malformed request body on {}: {}", req.path(), detail);
        if let Some(state) = req.app_data::<web::Data<AppState>>() {
            state.metrics.inc_rejected(RejectReason::MalformedBody);
        }
        InternalError::from_response(
            err,
            HttpResponse::UnprocessableEntity().json(ErrorDetail { detail }),
        )
        .into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(handlers::root))
        .route("/health", web::get().to(handlers::health))
        .route("/predict", web::post().to(handlers::predict));
}

/// Bind and run until the server is stopped.
pub async fn serve(config: &ServerEnvConfig, state: AppState) -> std::io::Result<()> {
    let data = web::Data::new(state);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::new("%r %s %Dms"))
            .wrap(cors())
            .app_data(data.clone())
            .configure(configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    info!("Listening on http://{}:{}", config.host, config.port);
    server.bind(config.bind_address())?.run().await
}
