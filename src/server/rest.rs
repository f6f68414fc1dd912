//! REST API exposure for the payment records
//!
//! The REST exposure consumes a record service and produces an Axum
//! `Router`. It holds no state of its own beyond the service handle.

use crate::core::{DashError, Page, PageQuery, Payment, RecordService};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct PaymentsState {
    pub service: Arc<dyn RecordService<Payment>>,
}

pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - `GET /payments?pageIndex=&pageSize=`
    /// - Custom routes
    pub fn build_router(state: PaymentsState, custom_routes: Vec<Router>) -> Router {
        let mut app = Self::health_routes().merge(Self::payment_routes(state));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app
    }

    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    fn payment_routes(state: PaymentsState) -> Router {
        Router::new()
            .route("/payments", get(list_payments))
            .with_state(state)
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "paydash"
        }))
    }
}

/// List one page of payments
///
/// Missing parameters fall back to the dashboard's initial table state
/// (`pageIndex=0`, `pageSize=10`). Unparseable parameters are reported
/// with the same JSON error body as out-of-range ones.
pub async fn list_payments(
    State(state): State<PaymentsState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Page<Payment>>, DashError> {
    let Query(query) = query.map_err(|rejection| {
        DashError::invalid_argument("query", rejection.body_text())
    })?;
    let request = query.validate()?;

    let page = state
        .service
        .get_page(request.page_index(), request.page_size())
        .await?;

    Ok(Json(page))
}
