use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde::Serialize;

use crate::AppState;
use crate::client::{self, ApiContext, ApiError};
use crate::dtos::ApiResponse;
use crate::dtos::auth_forms::{CheckAccountForm, LoginForm};
use crate::models::{CreateUserAccessTokenWithPassword, User};

use super::{AdminError, login_path, see_other, temporary_redirect};

const SESSION_COOKIE: &str = "sessionid";

#[derive(Debug, Serialize)]
struct DashboardData {
    user: User,
    /// md5 of the lowercased email, for the avatar in the page chrome.
    gravatar: String,
}

/// The tenant picker on the public landing page.
#[post("/check-account")]
pub async fn check_account(form: web::Form<CheckAccountForm>) -> Result<HttpResponse, AdminError> {
    let subdomain = form
        .subdomain
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AdminError::Validation("Subdomain is required".into()))?;

    Ok(see_other(&format!(
        "/admin/{}/dashboard",
        subdomain.to_lowercase()
    )))
}

/// `/admin/{subdomain}` itself is never rendered; it forwards to the login
/// page or the dashboard depending on whether a session cookie exists.
#[get("")]
pub async fn admin_index(req: HttpRequest, path: web::Path<String>) -> HttpResponse {
    let subdomain = path.into_inner();
    if req.cookie(SESSION_COOKIE).is_some() {
        temporary_redirect(&format!("/admin/{subdomain}/dashboard"))
    } else {
        temporary_redirect(&login_path(&subdomain))
    }
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    ctx: ApiContext,
    path: web::Path<String>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AdminError> {
    let subdomain = path.into_inner();
    let form = form.into_inner();

    let (Some(email), Some(password)) = (
        form.email.filter(|e| !e.trim().is_empty()),
        form.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(AdminError::Validation("Credentials are required".into()));
    };

    let access_token = client::accounts::access_token_with_password(
        &ctx,
        &CreateUserAccessTokenWithPassword {
            email: email.trim().to_string(),
            password,
        },
    )
    .await
    .map_err(|err| match err {
        ApiError::Status { status: 401, .. } | ApiError::Status { status: 403, .. } => {
            AdminError::Validation("Invalid credentials".into())
        }
        other => other.into(),
    })?;

    let prefix = format!("/admin/{subdomain}");

    // Relaxed attributes in development so the cookie survives plain-http
    // localhost round trips.
    let development = state.config.env.is_development();
    let cookie = Cookie::build(SESSION_COOKIE, access_token.token)
        .path(prefix.clone())
        .http_only(true)
        .secure(!development)
        .same_site(if development {
            SameSite::Lax
        } else {
            SameSite::Strict
        })
        .max_age(if development {
            Duration::days(30)
        } else {
            Duration::weeks(1)
        })
        .finish();

    log::info!("session opened for tenant {subdomain}");

    Ok(HttpResponse::SeeOther()
        .insert_header((actix_web::http::header::LOCATION, format!("{prefix}/dashboard")))
        .cookie(cookie)
        .finish())
}

#[post("/logout")]
pub async fn logout(path: web::Path<String>) -> HttpResponse {
    let subdomain = path.into_inner();

    let removal = Cookie::build(SESSION_COOKIE, "")
        .path(format!("/admin/{subdomain}"))
        .http_only(true)
        .max_age(Duration::ZERO)
        .finish();

    let mut response = see_other(&login_path(&subdomain));
    // drop the cookie alongside the redirect
    if let Err(err) = response.add_cookie(&removal) {
        log::error!("failed to clear session cookie: {err}");
    }
    response
}

#[get("/dashboard")]
pub async fn dashboard(
    ctx: ApiContext,
    path: web::Path<String>,
) -> Result<HttpResponse, AdminError> {
    let subdomain = path.into_inner();

    if ctx.token.is_none() {
        return Ok(see_other(&login_path(&subdomain)));
    }

    let user = client::accounts::user_profile(&ctx)
        .await
        .map_err(|err| super::redirect_unauthorized(err, &subdomain))?;

    let gravatar = format!("{:x}", md5::compute(user.email.trim().to_lowercase()));

    Ok(HttpResponse::Ok().json(ApiResponse::ok("", DashboardData { user, gravatar })))
}
