use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::core::validator::{self, FieldErrors};
use crate::domain::Enrollment;
use crate::http::AppState;

/// Created-enrollment response.
#[derive(Debug, Serialize)]
pub struct EnrollmentCreated {
    pub message: &'static str,
    pub enrollment: Enrollment,
}

/// Error response, with per-field messages when validation failed.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

/// How a request can fail past routing. Validation failures carry the
/// full field map back to the client; anything unexpected is logged and
/// rendered as the generic 500 body, never with detail.
#[derive(Debug)]
pub enum ApiFailure {
    Invalid(FieldErrors),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        match self {
            ApiFailure::Invalid(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    message: "Dados inválidos",
                    errors: Some(errors),
                }),
            )
                .into_response(),
            ApiFailure::Internal(err) => {
                tracing::error!(error = %err, "unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        message: "Erro interno",
                        errors: None,
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Service descriptor.
///
/// GET /
pub async fn service_descriptor() -> Json<Value> {
    Json(json!({
        "ok": true,
        "service": "matriculas-api",
        "endpoints": ["/cursos (GET)", "/matricula (POST)"]
    }))
}

/// Lists the course catalog in declaration order.
///
/// GET /cursos
pub async fn list_courses(State(state): State<AppState>) -> Response {
    (StatusCode::OK, Json(state.catalog.courses().to_vec())).into_response()
}

/// Validates a submission and stores the enrollment.
///
/// POST /matricula
///
/// The body is taken raw and parsed here instead of through the `Json`
/// extractor, so an undecodable body falls into the same
/// `geral: "Payload inválido"` shape as a non-object one.
pub async fn create_enrollment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiFailure> {
    let value: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let request = validator::validate(&value, &state.catalog).map_err(|errors| {
        tracing::debug!(fields = ?errors.keys().collect::<Vec<_>>(), "submission rejected");
        ApiFailure::Invalid(errors)
    })?;

    let enrollment = state.store.insert(request);

    tracing::info!(
        enrollment_id = %enrollment.id,
        course_id = %enrollment.course_id,
        total = state.store.len(),
        "Enrollment created"
    );

    Ok((
        StatusCode::CREATED,
        Json(EnrollmentCreated {
            message: "Matrícula criada",
            enrollment,
        }),
    )
        .into_response())
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Rota não encontrada" })),
    )
        .into_response()
}
