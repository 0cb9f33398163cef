//! HTTP transport for the move engine.
//!
//! Routes:
//! - `POST /api/ai-move` - engine move for a board
//! - `POST /api/reset`   - clear every per-game move count
//! - `GET  /`            - static banner
//! - `GET  /health`      - liveness

use crate::config::{ConfigError, ServerConfig};
use aigames_tictactoe::{Engine, MoveRequest, MoveResponse, ParseError};
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument, warn};

/// Response body for `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    /// Fixed greeting.
    pub message: String,
}

/// Response body for `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// Always `"ok"`.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Response body for `POST /api/reset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Number of counter entries dropped.
    pub cleared: usize,
}

/// Error body returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub error: String,
}

/// Failure while handling a request.
#[derive(Debug, Display, From)]
pub enum ApiError {
    /// The board in the request could not be decoded.
    #[display("{}", _0)]
    BadRequest(ParseError),

    /// The engine task did not complete.
    #[display("engine task failed: {}", _0)]
    Internal(tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(e) => {
                warn!(error = %e, "Rejected malformed request");
                (StatusCode::BAD_REQUEST, e.kind().to_string())
            }
            ApiError::Internal(e) => {
                error!(error = %e, "Engine task failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

async fn banner() -> Json<Banner> {
    Json(Banner {
        message: "Tic Tac Toe AI Backend".to_string(),
    })
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[instrument(
    skip(engine, request),
    fields(difficulty = %request.difficulty, ai = %request.ai_symbol)
)]
async fn ai_move(
    State(engine): State<Engine>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    // A full search is CPU bound; keep it off the async workers.
    let response = tokio::task::spawn_blocking(move || engine.ai_move(&request)).await??;
    info!(chosen = response.chosen, winner = ?response.winner, "Move computed");
    Ok(Json(response))
}

#[instrument(skip(engine))]
async fn reset(State(engine): State<Engine>) -> Json<ResetResponse> {
    let cleared = engine.reset();
    Json(ResetResponse {
        status: "ok".to_string(),
        cleared,
    })
}

/// Builds a CORS layer from configured origins.
///
/// A `"*"` entry allows any origin.
#[instrument]
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, ConfigError> {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let values = origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o)
                    .map_err(|e| ConfigError::new(format!("Invalid origin {:?}: {}", o, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(values)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Creates the application router.
pub fn router(engine: Engine, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
        .route("/api/ai-move", post(ai_move))
        .route("/api/reset", post(reset))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}

/// Binds to the configured address and serves until the process exits.
#[instrument(skip_all, fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: &ServerConfig, engine: Engine) -> anyhow::Result<()> {
    let app = router(engine, cors_layer(config.allowed_origins())?);

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(
        "Server ready at http://{}:{}/",
        config.host(),
        config.port()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
