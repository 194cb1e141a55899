pub mod auth_handlers;
pub mod category_handlers;
pub mod clipping_handlers;
pub mod media_handlers;
pub mod post_handlers;

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::client::ApiError;
use crate::dtos::ApiResponse;
use crate::forms::FormError;

#[derive(Debug, Error)]
pub enum AdminError {
    /// A form failed local validation; no upstream call was made.
    #[error("{0}")]
    Validation(String),
    #[error("authentication required")]
    Unauthorized,
    /// The upstream API rejected the call; its status passes through.
    #[error("upstream returned {status}")]
    Upstream { status: u16, body: String },
    /// Transport or decode failure talking to the upstream.
    #[error("gateway error: {0}")]
    Gateway(String),
    /// Page loads turn an upstream 401 into a redirect to the tenant login.
    #[error("redirecting to login")]
    LoginRedirect(String),
}

impl From<ApiError> for AdminError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status: 401, .. } => AdminError::Unauthorized,
            ApiError::Status { status, body } => AdminError::Upstream { status, body },
            other => AdminError::Gateway(other.to_string()),
        }
    }
}

impl From<FormError> for AdminError {
    fn from(err: FormError) -> Self {
        AdminError::Validation(err.to_string())
    }
}

impl ResponseError for AdminError {
    fn status_code(&self) -> StatusCode {
        match self {
            AdminError::Validation(_) => StatusCode::BAD_REQUEST,
            AdminError::Unauthorized => StatusCode::UNAUTHORIZED,
            AdminError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AdminError::Gateway(_) => StatusCode::BAD_GATEWAY,
            AdminError::LoginRedirect(_) => StatusCode::SEE_OTHER,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AdminError::LoginRedirect(location) => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location.clone()))
                .finish(),
            AdminError::Upstream { status, body } => {
                log::error!("upstream call failed: {} {}", status, body);
                HttpResponse::build(self.status_code())
                    .json(ApiResponse::error(format!("upstream returned {status}")))
            }
            other => HttpResponse::build(self.status_code())
                .json(ApiResponse::error(other.to_string())),
        }
    }
}

pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

pub(crate) fn temporary_redirect(location: &str) -> HttpResponse {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

pub(crate) fn login_path(subdomain: &str) -> String {
    format!("/admin/{subdomain}/login")
}

/// For page loads: an upstream 401 becomes a login redirect instead of a
/// bare 401 body.
pub(crate) fn redirect_unauthorized(err: ApiError, subdomain: &str) -> AdminError {
    match err {
        ApiError::Status { status: 401, .. } => AdminError::LoginRedirect(login_path(subdomain)),
        other => other.into(),
    }
}
