use actix_web::http::header::CONTENT_TYPE;
use actix_web::{HttpRequest, HttpResponse, get, post, web};

use crate::client::{self, ApiContext};
use crate::dtos::ApiResponse;
use crate::dtos::params::ImageListParams;
use crate::models::{CursorPagination, ImageQuery};

use super::{AdminError, redirect_unauthorized};

/// The media library shows 50 images per page, not the API default.
const MEDIA_PAGE_SIZE: i64 = 50;

#[get("/media")]
pub async fn list_images(
    ctx: ApiContext,
    path: web::Path<String>,
    params: web::Query<ImageListParams>,
) -> Result<HttpResponse, AdminError> {
    let subdomain = path.into_inner();
    let query = ImageQuery {
        size: params.size.clone(),
        pagination: CursorPagination {
            after: params.after.clone(),
            before: params.before.clone(),
            take: Some(params.take.unwrap_or(MEDIA_PAGE_SIZE)),
        },
        ..Default::default()
    };

    let images = client::media::list_images(&ctx, &query)
        .await
        .map_err(|err| redirect_unauthorized(err, &subdomain))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("", images)))
}

/// Uploads stream through to the media service untouched; the console does
/// not parse or re-encode the multipart body.
#[post("/media/images")]
pub async fn upload_image(
    req: HttpRequest,
    ctx: ApiContext,
    body: web::Bytes,
) -> Result<HttpResponse, AdminError> {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .filter(|ct| ct.starts_with("multipart/form-data"))
        .ok_or_else(|| AdminError::Validation("multipart form data expected".into()))?;

    let image = client::media::upload_image(&ctx, content_type, body).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Image uploaded", image)))
}
