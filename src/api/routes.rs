//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::estimator::{self, EventType};

use super::types::*;

/// Liveness banner served at the root path.
const BANNER: &str = "SHUBAKAR AI Budget Assistant is Running";

/// Fixed summary line attached to every estimate.
const ESTIMATE_MESSAGE: &str = "Budget estimation calculated based on market standards.";

/// Shared application state.
pub struct AppState {
    pub config: Config,
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        config: config.clone(),
    });

    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Build the application router.
fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/predict-budget", post(predict_budget))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Liveness banner.
async fn home() -> &'static str {
    BANNER
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Estimate a budget breakdown for an event.
async fn predict_budget(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PredictBudgetRequest>,
) -> Result<Json<PredictBudgetResponse>, (StatusCode, String)> {
    let event_type = EventType::parse(&req.event_type);

    let estimate = estimator::estimate(&state.config.estimator, event_type, req.guests, req.budget)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    tracing::debug!(
        event_type = %req.event_type,
        guests = req.guests,
        budget = req.budget,
        estimated_total = estimate.estimated_total,
        "Computed budget estimate"
    );

    Ok(Json(PredictBudgetResponse {
        status: "success".to_string(),
        input: EstimateInput {
            event_type: req.event_type,
            guests: req.guests,
            budget: req.budget,
        },
        estimated_total: estimate.estimated_total,
        breakdown: estimate.breakdown,
        message: ESTIMATE_MESSAGE.to_string(),
        warnings: estimate.warnings,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::Category;

    fn state() -> Arc<AppState> {
        Arc::new(AppState {
            config: Config::default(),
        })
    }

    fn request(event_type: &str, guests: u64, budget: f64) -> PredictBudgetRequest {
        PredictBudgetRequest {
            event_type: event_type.to_string(),
            guests,
            budget,
            location: "Generic".to_string(),
        }
    }

    #[tokio::test]
    async fn home_returns_banner() {
        assert_eq!(home().await, BANNER);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(resp) = health().await;
        assert_eq!(resp.status, "ok");
        assert_eq!(resp.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn predict_budget_returns_success_envelope() {
        let Json(resp) = predict_budget(State(state()), Json(request("Wedding", 100, 0.0)))
            .await
            .expect("estimate should succeed");

        assert_eq!(resp.status, "success");
        assert_eq!(resp.message, ESTIMATE_MESSAGE);
        assert_eq!(resp.input.event_type, "Wedding");
        assert_eq!(resp.input.guests, 100);
        assert_eq!(resp.input.budget, 0.0);
        assert_eq!(resp.estimated_total, 250_000);
        assert_eq!(resp.breakdown[&Category::Venue], 100_000);
        assert!(resp.warnings.is_empty());
    }

    #[tokio::test]
    async fn predict_budget_echoes_unrecognised_label() {
        let Json(resp) = predict_budget(State(state()), Json(request("UnknownType", 0, 0.0)))
            .await
            .expect("estimate should succeed");

        // The label is echoed as sent; the computation fell back to Other.
        assert_eq!(resp.input.event_type, "UnknownType");
        assert_eq!(resp.estimated_total, 0);
        assert!(resp.breakdown.values().all(|&amount| amount == 0));
    }

    #[tokio::test]
    async fn predict_budget_surfaces_low_budget_warning() {
        let Json(resp) = predict_budget(State(state()), Json(request("Other", 1500, 300_000.0)))
            .await
            .expect("estimate should succeed");

        assert_eq!(resp.estimated_total, 300_000);
        assert_eq!(resp.warnings.len(), 1);
    }

    #[tokio::test]
    async fn predict_budget_rejects_negative_budget() {
        let (status, body) = predict_budget(State(state()), Json(request("Wedding", 10, -500.0)))
            .await
            .expect_err("negative budget must be rejected");

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("non-negative"));
    }

    #[test]
    fn request_defaults_match_contract() {
        let req: PredictBudgetRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.event_type, "Other");
        assert_eq!(req.guests, 0);
        assert_eq!(req.budget, 0.0);
        assert_eq!(req.location, "Generic");
    }

    #[test]
    fn request_rejects_non_numeric_guests() {
        let result: Result<PredictBudgetRequest, _> =
            serde_json::from_str(r#"{"guests": "lots"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn request_rejects_negative_guests() {
        let result: Result<PredictBudgetRequest, _> = serde_json::from_str(r#"{"guests": -5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn request_rejects_fractional_guests() {
        let result: Result<PredictBudgetRequest, _> = serde_json::from_str(r#"{"guests": 10.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn response_serialises_breakdown_with_category_names() {
        let req = request("Corporate", 50, 100_000.0);
        let estimate = crate::estimator::estimate(
            &Config::default().estimator,
            EventType::parse(&req.event_type),
            req.guests,
            req.budget,
        )
        .unwrap();

        let resp = PredictBudgetResponse {
            status: "success".to_string(),
            input: EstimateInput {
                event_type: req.event_type,
                guests: req.guests,
                budget: req.budget,
            },
            estimated_total: estimate.estimated_total,
            breakdown: estimate.breakdown,
            message: ESTIMATE_MESSAGE.to_string(),
            warnings: estimate.warnings,
        };

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["breakdown"]["Venue"], 50_000);
        assert_eq!(json["breakdown"]["Catering"], 30_000);
        assert_eq!(json["breakdown"]["Decor"], 5_000);
        assert_eq!(json["breakdown"]["Photography"], 5_000);
        assert_eq!(json["breakdown"]["Entertainment"], 10_000);
        assert_eq!(json["warnings"], serde_json::json!([]));
    }
}
