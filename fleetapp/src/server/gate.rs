use axum::{
    extract::{
        Extension,
        Request,
        State,
    },
    middleware::Next,
    response::{
        IntoResponse,
        Response,
    },
    Json,
};
use fleetac::{
    gate::GateView,
    AccessGate,
};
use fleetcore::ac::page::PageKey;
use http::status::StatusCode;
use serde::Serialize;

use crate::{
    error::AppError,
    server::Caller,
};

#[derive(Debug, Serialize)]
pub struct Denied {
    pub error: &'static str,
    pub page: PageKey,
    pub fallback: String,
}

/// Admit the request to the wrapped handler only when the gate grants
/// access; the handler is not invoked otherwise.
pub async fn enforce_gate(
    State(gate): State<AccessGate>,
    Extension(caller): Extension<Caller>,
    req: Request,
    next: Next,
) -> Response {
    match gate.guard(&caller.resolution, || next.run(req)) {
        GateView::Granted(response) => response.await,
        GateView::Denied { page, fallback } => {
            log::info!(
                "{} denied {} access to {page}",
                caller.agent,
                gate.required_level(),
            );
            (StatusCode::FORBIDDEN, Json(Denied {
                error: "access denied",
                page,
                fallback,
            })).into_response()
        }
        GateView::Error => {
            if let Some(e) = caller.resolution.error() {
                log::warn!("permission resolution failed for {}: {e}", caller.agent);
            }
            AppError::InternalServerError.into_response()
        }
        GateView::Loading => AppError::ServiceUnavailable.into_response(),
    }
}
