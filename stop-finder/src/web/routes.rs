//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::finder::FindStopError;

use super::dto::PlaceForm;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page).post(find_stop))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Index page with the place-name form.
async fn index_page() -> Result<Html<String>, AppError> {
    Ok(Html(IndexTemplate.render()?))
}

/// Look up the stop nearest to the submitted place.
async fn find_stop(
    State(state): State<AppState>,
    Form(form): Form<PlaceForm>,
) -> Result<Html<String>, AppError> {
    let place_name = form.place_name().ok_or_else(|| AppError::BadRequest {
        message: "Please enter a place name or address.".to_string(),
    })?;

    info!(place_name, "place name received");

    let nearest = state.finder.find_stop_near(place_name).await?;

    let html = ResultTemplate::from_nearest(&nearest).render()?;
    Ok(Html(html))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AppError::BadRequest { .. } => "Missing place name",
            AppError::NotFound { .. } => "No stop found",
            AppError::Internal { .. } => "Something went wrong",
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl From<FindStopError> for AppError {
    fn from(e: FindStopError) -> Self {
        if e.is_not_found() {
            AppError::NotFound {
                message: e.to_string(),
            }
        } else {
            AppError::Internal {
                message: e.to_string(),
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Internal {
            message: format!("Template error: {}", e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(%status, message = self.message(), "request failed");
        } else {
            warn!(%status, message = self.message(), "request rejected");
        }

        let template = ErrorTemplate {
            title: self.title().to_string(),
            message: self.message().to_string(),
        };

        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                error!(error = %e, "failed to render error page");
                (status, self.message().to_string()).into_response()
            }
        }
    }
}
