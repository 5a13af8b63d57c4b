use super::AppState;
use super::dto::{ErrorDetail, FeatureOrderError, HealthStatus, LoanInput, RootMessage};
use crate::domain::ml::{DefaultPrediction, FeatureVector};
use crate::infrastructure::observability::RejectReason;
use actix_web::{HttpResponse, web};
use tracing::{debug, error, warn};

pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(RootMessage {
        message: "Loan Default Prediction API is running",
    })
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok",
        message: "Backend is awake",
    })
}

pub async fn predict(state: web::Data<AppState>, payload: web::Json<LoanInput>) -> HttpResponse {
    let features = match FeatureVector::try_from(payload.into_inner().features) {
        Ok(features) => features,
        Err(e) => {
            warn!("Rejected prediction request: {:?}", e);
            state.metrics.inc_rejected(RejectReason::FeatureCount);
            return HttpResponse::Ok().json(FeatureOrderError::new(&e));
        }
    };

    let inference = {
        let _timer = state.metrics.start_inference_timer();
        state.store.transform_and_predict(&features)
    };

    match inference {
        Ok(inference) => {
            let prediction = DefaultPrediction::from(inference);
            debug!(
                "Prediction: {} (p={:.4})",
                prediction.label, prediction.default_probability
            );
            state.metrics.inc_predictions(prediction.label);
            HttpResponse::Ok().json(prediction)
        }
        Err(e) => {
            error!("Inference failed: {}", e);
            state.metrics.inc_rejected(RejectReason::Inference);
            HttpResponse::InternalServerError().json(ErrorDetail {
                detail: e.to_string(),
            })
        }
    }
}
